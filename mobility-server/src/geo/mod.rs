//! Great-circle distance between locations.
//!
//! The haversine formula gives the distance between two points on a
//! sphere from their latitudes and longitudes. City-scale trips do not
//! need an ellipsoidal model.

use crate::domain::Coordinates;

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// Pure and deterministic: always returns a non-negative, finite value,
/// zero for identical points, and the same value in both directions.
///
/// # Examples
///
/// ```
/// use mobility_server::domain::Coordinates;
/// use mobility_server::geo::distance_km;
///
/// let la_carolina = Coordinates::new(-0.1807, -78.4678);
/// let centro = Coordinates::new(-0.2201, -78.5123);
///
/// let d = distance_km(&la_carolina, &centro);
/// assert!(d > 6.0 && d < 7.0);
/// ```
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
