//! Hemisphere classification
//!
//! Classification is sign based and strict: points lying exactly on the
//! equator or the prime meridian belong to neither the northern nor the
//! eastern hemisphere.

use std::fmt;

/// Checks if a latitude is in the Northern Hemisphere (strictly above 0)
pub fn is_northern_hemisphere(latitude: f64) -> bool {
    latitude > 0.0
}

/// Checks if a longitude is in the Eastern Hemisphere (strictly above 0)
pub fn is_eastern_hemisphere(longitude: f64) -> bool {
    longitude > 0.0
}

/// North/south classification of a latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeHemisphere {
    North,
    South,
    /// Exactly on the equator
    Equator,
}

impl LatitudeHemisphere {
    /// Classify a latitude
    pub fn of(latitude: f64) -> Self {
        if is_northern_hemisphere(latitude) {
            LatitudeHemisphere::North
        } else if latitude == 0.0 {
            LatitudeHemisphere::Equator
        } else {
            LatitudeHemisphere::South
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LatitudeHemisphere::North => "Northern",
            LatitudeHemisphere::South => "Southern",
            LatitudeHemisphere::Equator => "Equator",
        }
    }

    /// Compass suffix, empty on the equator
    pub fn suffix(&self) -> &'static str {
        match self {
            LatitudeHemisphere::North => "N",
            LatitudeHemisphere::South => "S",
            LatitudeHemisphere::Equator => "",
        }
    }
}

/// East/west classification of a longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudeHemisphere {
    East,
    West,
    /// Exactly on the prime meridian
    Meridian,
}

impl LongitudeHemisphere {
    /// Classify a longitude
    pub fn of(longitude: f64) -> Self {
        if is_eastern_hemisphere(longitude) {
            LongitudeHemisphere::East
        } else if longitude == 0.0 {
            LongitudeHemisphere::Meridian
        } else {
            LongitudeHemisphere::West
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LongitudeHemisphere::East => "Eastern",
            LongitudeHemisphere::West => "Western",
            LongitudeHemisphere::Meridian => "Prime Meridian",
        }
    }

    /// Compass suffix, empty on the prime meridian
    pub fn suffix(&self) -> &'static str {
        match self {
            LongitudeHemisphere::East => "E",
            LongitudeHemisphere::West => "W",
            LongitudeHemisphere::Meridian => "",
        }
    }
}

impl fmt::Display for LatitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LongitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describe both hemispheres of a point, e.g. "Northern, Western"
pub fn describe_hemispheres(latitude: f64, longitude: f64) -> String {
    format!(
        "{}, {}",
        LatitudeHemisphere::of(latitude),
        LongitudeHemisphere::of(longitude)
    )
}
