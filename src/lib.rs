pub mod errors;
pub mod config;
pub mod utils;
pub mod coordinate;
pub mod commands;

pub use errors::{AntipodeError, AntipodeResult};
pub use config::Config;
pub use coordinate::{
    antipodal, antipodal_latitude, antipodal_longitude, antipodal_with_validation,
    is_eastern_hemisphere, is_northern_hemisphere, is_valid_coordinates, is_valid_latitude,
    is_valid_longitude, GeoPoint,
};
