//! Coordinate range validation

/// Minimum valid latitude in degrees
pub const MIN_LATITUDE: f64 = -90.0;
/// Maximum valid latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Minimum valid longitude in degrees
pub const MIN_LONGITUDE: f64 = -180.0;
/// Maximum valid longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// Checks the latitude lies within [-90, 90] inclusive
pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude >= MIN_LATITUDE && latitude <= MAX_LATITUDE
}

/// Checks the longitude lies within [-180, 180] inclusive
pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude >= MIN_LONGITUDE && longitude <= MAX_LONGITUDE
}

/// Checks both coordinates are within their valid ranges
pub fn is_valid_coordinates(latitude: f64, longitude: f64) -> bool {
    is_valid_latitude(latitude) && is_valid_longitude(longitude)
}
