pub mod country_service;
pub mod spot_service;

pub use country_service::*;
pub use spot_service::*;
