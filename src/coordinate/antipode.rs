//! Antipodal point computation
//!
//! The antipode of a point is reached by negating the latitude and shifting
//! the longitude by 180 degrees.

use super::validation::is_valid_coordinates;
use crate::errors::{AntipodeError, AntipodeResult};

/// Computes the antipodal latitude
pub fn antipodal_latitude(latitude: f64) -> f64 {
    -latitude
}

/// Computes the antipodal longitude, normalized into (-180, 180]
///
/// Only one wraparound step is applied, so the result is in range for any
/// input already within [-180, 180]. A shifted value of exactly -180 is moved
/// to 180, while exactly 180 is kept, which makes -180 map to 0 and then to 180
/// rather than back to -180.
pub fn antipodal_longitude(longitude: f64) -> f64 {
    let result = longitude + 180.0;
    if result > 180.0 {
        result - 360.0
    } else if result <= -180.0 {
        result + 360.0
    } else {
        result
    }
}

/// Computes the antipodal point as a `(latitude, longitude)` pair
///
/// No range validation is performed.
pub fn antipodal(latitude: f64, longitude: f64) -> (f64, f64) {
    (antipodal_latitude(latitude), antipodal_longitude(longitude))
}

/// Computes the antipodal point after checking both coordinates are in range
///
/// # Arguments
/// * `latitude` - Latitude in degrees, expected within [-90, 90]
/// * `longitude` - Longitude in degrees, expected within [-180, 180]
///
/// # Returns
/// The antipodal `(latitude, longitude)` or `AntipodeError::InvalidArgument`
pub fn antipodal_with_validation(latitude: f64, longitude: f64) -> AntipodeResult<(f64, f64)> {
    if !is_valid_coordinates(latitude, longitude) {
        return Err(AntipodeError::InvalidArgument { latitude, longitude });
    }
    Ok(antipodal(latitude, longitude))
}
