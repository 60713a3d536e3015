//! Point structure for representing geographic coordinates

use std::fmt;

use super::antipode::{antipodal, antipodal_with_validation};
use super::hemisphere::{LatitudeHemisphere, LongitudeHemisphere};
use super::validation::is_valid_coordinates;
use crate::errors::AntipodeResult;

/// Default number of decimal places when displaying a point
pub const DEFAULT_PRECISION: usize = 4;

/// A geographic point in degrees
///
/// No range invariant is enforced on construction; use [`GeoPoint::is_valid`]
/// or [`GeoPoint::checked_antipode`] when the input is untrusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Get the antipodal point without validation
    pub fn antipode(&self) -> GeoPoint {
        antipodal(self.latitude, self.longitude).into()
    }

    /// Get the antipodal point, failing if this point is out of range
    pub fn checked_antipode(&self) -> AntipodeResult<GeoPoint> {
        antipodal_with_validation(self.latitude, self.longitude).map(GeoPoint::from)
    }

    /// Check both coordinates are within their valid ranges
    pub fn is_valid(&self) -> bool {
        is_valid_coordinates(self.latitude, self.longitude)
    }

    /// Get the hemispheres this point lies in
    pub fn hemispheres(&self) -> (LatitudeHemisphere, LongitudeHemisphere) {
        (
            LatitudeHemisphere::of(self.latitude),
            LongitudeHemisphere::of(self.longitude),
        )
    }

    /// Format as "latitude <lat>, longitude <lon>" with the given decimal places
    pub fn format_with_precision(&self, precision: usize) -> String {
        format!(
            "latitude {:.*}, longitude {:.*}",
            precision, self.latitude, precision, self.longitude
        )
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoPoint::new(latitude, longitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.latitude, point.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_precision(DEFAULT_PRECISION))
    }
}
