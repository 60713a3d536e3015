//! Tests for hemisphere classification

use crate::coordinate::{
    describe_hemispheres, is_eastern_hemisphere, is_northern_hemisphere, LatitudeHemisphere,
    LongitudeHemisphere, GeoPoint,
};

#[test]
fn test_northern_is_strict() {
    assert!(!is_northern_hemisphere(0.0));
    assert!(is_northern_hemisphere(0.0001));
    assert!(!is_northern_hemisphere(-0.0001));
}

#[test]
fn test_eastern_is_strict() {
    assert!(!is_eastern_hemisphere(0.0));
    assert!(is_eastern_hemisphere(0.0001));
    assert!(!is_eastern_hemisphere(-120.0));
}

#[test]
fn test_labels() {
    assert_eq!(LatitudeHemisphere::of(12.0), LatitudeHemisphere::North);
    assert_eq!(LatitudeHemisphere::of(-12.0), LatitudeHemisphere::South);
    assert_eq!(LatitudeHemisphere::of(0.0), LatitudeHemisphere::Equator);
    assert_eq!(LatitudeHemisphere::of(-0.0), LatitudeHemisphere::Equator);

    assert_eq!(LongitudeHemisphere::of(1.0), LongitudeHemisphere::East);
    assert_eq!(LongitudeHemisphere::of(-1.0), LongitudeHemisphere::West);
    assert_eq!(LongitudeHemisphere::of(0.0), LongitudeHemisphere::Meridian);

    assert_eq!(LatitudeHemisphere::South.suffix(), "S");
    assert_eq!(LongitudeHemisphere::Meridian.suffix(), "");
}

#[test]
fn test_describe() {
    assert_eq!(describe_hemispheres(40.7128, -74.0060), "Northern, Western");
    assert_eq!(describe_hemispheres(-40.7128, 105.994), "Southern, Eastern");
    assert_eq!(describe_hemispheres(0.0, 0.0), "Equator, Prime Meridian");
}

#[test]
fn test_antipode_flips_hemispheres() {
    let point = GeoPoint::new(51.5074, -0.1278);
    let (lat, lon) = point.antipode().hemispheres();
    assert_eq!(lat, LatitudeHemisphere::South);
    assert_eq!(lon, LongitudeHemisphere::East);
}
