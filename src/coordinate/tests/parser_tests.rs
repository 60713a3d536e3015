//! Tests for coordinate text parsing

use crate::coordinate::{parse_coordinate, parse_coordinate_pair, Axis};
use crate::errors::AntipodeError;

#[test]
fn test_plain_values() {
    assert_eq!(parse_coordinate("40.7128", Axis::Latitude).unwrap(), 40.7128);
    assert_eq!(parse_coordinate(" -74.0060 ", Axis::Longitude).unwrap(), -74.006);
    assert_eq!(parse_coordinate("+.5", Axis::Latitude).unwrap(), 0.5);
    assert_eq!(parse_coordinate("12.", Axis::Longitude).unwrap(), 12.0);
}

#[test]
fn test_exponent_notation() {
    assert_eq!(parse_coordinate("1e1", Axis::Latitude).unwrap(), 10.0);
    assert_eq!(parse_coordinate("-1.5E+2", Axis::Longitude).unwrap(), -150.0);
    assert_eq!(parse_coordinate("2.5e-1N", Axis::Latitude).unwrap(), 0.25);
    assert!(parse_coordinate("1e", Axis::Latitude).is_err());
    assert_eq!(parse_coordinate_pair("1e1,-2e1").unwrap(), (10.0, -20.0));
}

#[test]
fn test_suffixes() {
    assert_eq!(parse_coordinate("40.7128N", Axis::Latitude).unwrap(), 40.7128);
    assert_eq!(parse_coordinate("33.8688 s", Axis::Latitude).unwrap(), -33.8688);
    assert_eq!(parse_coordinate("74.0060W", Axis::Longitude).unwrap(), -74.006);
    assert_eq!(parse_coordinate("151.2093E", Axis::Longitude).unwrap(), 151.2093);
}

#[test]
fn test_rejects_bad_suffixes() {
    assert!(matches!(
        parse_coordinate("40E", Axis::Latitude),
        Err(AntipodeError::ParseError(_))
    ));
    assert!(parse_coordinate("74N", Axis::Longitude).is_err());
    assert!(parse_coordinate("-40N", Axis::Latitude).is_err());
}

#[test]
fn test_rejects_garbage() {
    assert!(parse_coordinate("", Axis::Latitude).is_err());
    assert!(parse_coordinate("abc", Axis::Latitude).is_err());
    assert!(parse_coordinate("1.2.3", Axis::Longitude).is_err());
    assert!(parse_coordinate("40 N N", Axis::Latitude).is_err());
}

#[test]
fn test_no_range_check() {
    assert_eq!(parse_coordinate("123.0", Axis::Latitude).unwrap(), 123.0);
}

#[test]
fn test_pairs() {
    assert_eq!(parse_coordinate_pair("40.7128,-74.0060").unwrap(), (40.7128, -74.006));
    assert_eq!(parse_coordinate_pair("40.7128, -74.0060").unwrap(), (40.7128, -74.006));
    assert_eq!(parse_coordinate_pair("40.7128N 74.0060W").unwrap(), (40.7128, -74.006));
    assert_eq!(parse_coordinate_pair("33.8688 S, 151.2093 E").unwrap(), (-33.8688, 151.2093));
    assert_eq!(parse_coordinate_pair("0 0").unwrap(), (0.0, 0.0));
}

#[test]
fn test_bad_pairs() {
    assert!(parse_coordinate_pair("40.7128").is_err());
    assert!(parse_coordinate_pair("40.7128,-74.0060,3").is_err());
    assert!(parse_coordinate_pair("74.0060W 40.7128N").is_err());
}
