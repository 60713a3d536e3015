//! Coordinate handling for antipode computation
//!
//! This module provides the pure antipodal math, range validation,
//! hemisphere classification and parsing of coordinate text.

mod antipode;
mod hemisphere;
mod parser;
mod point;
mod validation;
#[cfg(test)]
mod tests;

// Re-export key types and functions
pub use self::antipode::{antipodal, antipodal_latitude, antipodal_longitude, antipodal_with_validation};
pub use self::hemisphere::{
    describe_hemispheres, is_eastern_hemisphere, is_northern_hemisphere, LatitudeHemisphere,
    LongitudeHemisphere,
};
pub use self::parser::{parse_coordinate, parse_coordinate_pair, Axis};
pub use self::point::{GeoPoint, DEFAULT_PRECISION};
pub use self::validation::{
    is_valid_coordinates, is_valid_latitude, is_valid_longitude, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
