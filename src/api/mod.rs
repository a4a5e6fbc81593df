pub mod health;
pub mod countries;
pub mod my_list;
pub mod swagger;
pub mod tourist_spots;
