//! Tests for antipodal point computation

use crate::coordinate::{
    antipodal, antipodal_latitude, antipodal_longitude, antipodal_with_validation, GeoPoint,
};
use crate::errors::AntipodeError;

#[test]
fn test_latitude_is_negated() {
    assert_eq!(antipodal_latitude(40.7128), -40.7128);
    assert_eq!(antipodal_latitude(-90.0), 90.0);
    assert_eq!(antipodal_latitude(0.0), 0.0);
}

#[test]
fn test_latitude_involution() {
    for lat in [-90.0, -45.5, -0.0001, 0.0, 12.25, 89.9999, 90.0] {
        assert_eq!(antipodal_latitude(antipodal_latitude(lat)), lat);
    }
}

#[test]
fn test_longitude_wraparound() {
    assert_eq!(antipodal_longitude(0.0), 180.0);
    assert_eq!(antipodal_longitude(180.0), 0.0);
    assert_eq!(antipodal_longitude(90.0), -90.0);
    assert_eq!(antipodal_longitude(-90.0), 90.0);
    assert_eq!(antipodal_longitude(-180.0), 0.0);
}

#[test]
fn test_longitude_result_in_half_open_range() {
    let mut lon = -180.0;
    while lon <= 180.0 {
        let result = antipodal_longitude(lon);
        assert!(result > -180.0 && result <= 180.0, "{} -> {}", lon, result);
        lon += 0.5;
    }
}

#[test]
fn test_longitude_involution_except_negative_boundary() {
    for lon in [-179.5, -90.0, -0.25, 0.0, 45.0, 135.0, 179.75, 180.0] {
        assert_eq!(antipodal_longitude(antipodal_longitude(lon)), lon);
    }

    // -180 comes back as 180, not -180
    assert_eq!(antipodal_longitude(antipodal_longitude(-180.0)), 180.0);
}

#[test]
fn test_new_york() {
    let (lat, lon) = antipodal(40.7128, -74.0060);
    assert!((lat - -40.7128).abs() < 1e-4);
    assert!((lon - 105.994).abs() < 1e-9);
}

#[test]
fn test_origin_and_date_line() {
    assert_eq!(antipodal(0.0, 0.0), (0.0, 180.0));
    assert_eq!(antipodal(45.0, 180.0), (-45.0, 0.0));
}

#[test]
fn test_validation_rejects_out_of_range() {
    let err = antipodal_with_validation(91.0, 0.0).unwrap_err();
    assert!(matches!(err, AntipodeError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid coordinates: latitude=91.0000, longitude=0.0000"
    );

    assert!(antipodal_with_validation(0.0, -180.0001).is_err());
    assert!(antipodal_with_validation(f64::NAN, 0.0).is_err());
}

#[test]
fn test_validation_passes_through_valid_input() {
    assert_eq!(antipodal_with_validation(90.0, -180.0).unwrap(), (-90.0, 0.0));
    assert_eq!(
        antipodal_with_validation(10.0, 20.0).unwrap(),
        antipodal(10.0, 20.0)
    );
}

#[test]
fn test_geo_point() {
    let point = GeoPoint::new(45.0, 180.0);
    assert_eq!(point.antipode(), GeoPoint::new(-45.0, 0.0));
    assert!(point.is_valid());
    assert_eq!(point.checked_antipode().unwrap(), point.antipode());

    let invalid = GeoPoint::new(-95.0, 10.0);
    assert!(!invalid.is_valid());
    assert!(invalid.checked_antipode().is_err());
}

#[test]
fn test_geo_point_formatting() {
    let point = GeoPoint::from(antipodal(40.7128, -74.0060));
    assert_eq!(point.to_string(), "latitude -40.7128, longitude 105.9940");
    assert_eq!(point.format_with_precision(1), "latitude -40.7, longitude 106.0");

    let pair: (f64, f64) = point.into();
    assert_eq!(pair.0, -40.7128);
}
