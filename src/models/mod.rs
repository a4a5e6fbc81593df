pub mod tourist_spot;

pub use tourist_spot::*;
