//! Spherical-earth geodesy used to size cluster cells.
//!
//! Points are `geo::Point` with x = longitude and y = latitude, in degrees.
//! Distances are kilometers on a sphere of radius [`EARTH_RADIUS_KM`].
//! Formulas follow the classic "movable type" great-circle set.

use geo::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points using the haversine formula.
///
/// # Examples
///
/// ```rust
/// use zoomclust::geodesy::distance;
/// use geo::Point;
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// let la = Point::new(-118.2437, 34.0522);
///
/// let km = distance(&nyc, &la);
/// assert!(km > 3_900.0 && km < 4_000.0);
/// assert_eq!(distance(&nyc, &nyc), 0.0);
/// ```
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dlat = (p2.y() - p1.y()).to_radians();
    let dlon = (p2.x() - p1.x()).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + p1.y().to_radians().cos() * p2.y().to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Point reached by travelling `dist_km` along a great circle from `origin`
/// with initial `bearing_deg` (clockwise from north).
///
/// The resulting longitude is normalized with [`normalize_longitude`].
///
/// # Examples
///
/// ```rust
/// use zoomclust::geodesy::destination_point;
/// use geo::Point;
///
/// // Due north along a meridian: roughly 1 degree per 111 km
/// let p = destination_point(&Point::new(10.0, 0.0), 111.195, 0.0);
/// assert!((p.y() - 1.0).abs() < 1e-3);
/// assert!((p.x() - 10.0).abs() < 1e-9);
/// ```
pub fn destination_point(origin: &Point, dist_km: f64, bearing_deg: f64) -> Point {
    let lat1 = origin.y().to_radians();
    let lon1 = origin.x().to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = dist_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Point::new(normalize_longitude(lon2.to_degrees()), lat2.to_degrees())
}

/// Project `center` by `dist_km` north, east, south and west, in that order.
pub fn cardinal_points(center: &Point, dist_km: f64) -> [Point; 4] {
    [0.0, 90.0, 180.0, 270.0].map(|bearing| destination_point(center, dist_km, bearing))
}

/// Fold a longitude into [-180, 180) with `((deg + 540) mod 360) - 180`.
///
/// Uses the Euclidean remainder so negative inputs wrap the same way as
/// positive ones.
#[inline]
pub fn normalize_longitude(deg: f64) -> f64 {
    (deg + 540.0).rem_euclid(360.0) - 180.0
}
