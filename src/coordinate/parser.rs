//! Parsing of coordinate text
//!
//! Accepts plain decimal degrees ("-74.0060", "1e1") as well as values carrying a
//! compass suffix ("74.0060W", "40.7128 n"). Parsing never checks ranges.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{AntipodeError, AntipodeResult};

const NUMBER_PATTERN: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?";

lazy_static! {
    static ref COORDINATE_RE: Regex = Regex::new(&format!(
        r"^\s*(?P<value>{})\s*(?P<suffix>[NSEWnsew])?\s*$",
        NUMBER_PATTERN
    ))
    .expect("coordinate pattern is valid");

    static ref PAIR_RE: Regex = Regex::new(&format!(
        r"^\s*(?P<lat>{num}\s*[NSns]?)\s*(?:,\s*|\s+)(?P<lon>{num}\s*[EWew]?)\s*$",
        num = NUMBER_PATTERN
    ))
    .expect("coordinate pair pattern is valid");
}

/// Which axis a coordinate value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }

    /// Suffixes allowed for this axis as (positive, negative)
    fn suffixes(&self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

/// Parse a single coordinate value in degrees
///
/// # Arguments
/// * `text` - Decimal degrees with an optional compass suffix
/// * `axis` - Axis the value belongs to, used to check the suffix
///
/// # Returns
/// The signed value in degrees, negative for S and W
pub fn parse_coordinate(text: &str, axis: Axis) -> AntipodeResult<f64> {
    let caps = COORDINATE_RE.captures(text).ok_or_else(|| {
        AntipodeError::ParseError(format!("Invalid {} value: '{}'", axis.name(), text.trim()))
    })?;

    let raw = &caps["value"];
    let value = raw.parse::<f64>().map_err(|e| {
        AntipodeError::ParseError(format!("Invalid {} value '{}': {}", axis.name(), raw, e))
    })?;

    let suffix = match caps.name("suffix") {
        Some(m) => m.as_str().to_ascii_uppercase().chars().next(),
        None => None,
    };

    let Some(suffix) = suffix else {
        return Ok(value);
    };

    if raw.starts_with('-') {
        return Err(AntipodeError::ParseError(format!(
            "Negative {} '{}' cannot carry a hemisphere suffix",
            axis.name(),
            text.trim()
        )));
    }

    let (positive, negative) = axis.suffixes();
    if suffix == positive {
        Ok(value)
    } else if suffix == negative {
        Ok(-value)
    } else {
        Err(AntipodeError::ParseError(format!(
            "Suffix '{}' is not valid for {}, expected {} or {}",
            suffix,
            axis.name(),
            positive,
            negative
        )))
    }
}

/// Parse a latitude/longitude pair such as "40.7128,-74.0060" or "40.7128N 74.0060W"
pub fn parse_coordinate_pair(text: &str) -> AntipodeResult<(f64, f64)> {
    let caps = PAIR_RE.captures(text).ok_or_else(|| {
        AntipodeError::ParseError(format!(
            "Invalid coordinate pair '{}', expected 'latitude,longitude'",
            text.trim()
        ))
    })?;

    let latitude = parse_coordinate(&caps["lat"], Axis::Latitude)?;
    let longitude = parse_coordinate(&caps["lon"], Axis::Longitude)?;
    debug!("Parsed '{}' as ({}, {})", text.trim(), latitude, longitude);

    Ok((latitude, longitude))
}
