//! Great-circle distance and bearing calculations.
//!
//! The haversine formula gives the great-circle distance between two
//! points on a sphere; the forward-azimuth formula gives the initial
//! compass bearing of the great-circle path from one point to the other.

use crate::domain::LatLon;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Feet per kilometer.
pub const FEET_PER_KM: f64 = 1000.0 * 3.28084;

/// Great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use compass_server::domain::LatLon;
/// use compass_server::geo::haversine_km;
///
/// let berlin = LatLon::new(52.5200, 13.4050).unwrap();
/// let paris = LatLon::new(48.8566, 2.3522).unwrap();
///
/// let distance = haversine_km(&berlin, &paris);
/// assert!((distance - 878.0).abs() < 5.0);
/// ```
pub fn haversine_km(from: &LatLon, to: &LatLon) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let d_phi = (to.latitude() - from.latitude()).to_radians();
    let d_lambda = (to.longitude() - from.longitude()).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two coordinates in feet.
pub fn haversine_ft(from: &LatLon, to: &LatLon) -> f64 {
    haversine_km(from, to) * FEET_PER_KM
}

/// Initial bearing (forward azimuth) from one coordinate to another,
/// in compass degrees: 0 = north, clockwise, always in [0, 360).
///
/// The bearing from a point to itself is degenerate; this returns 0.0
/// for that case, as `atan2(0, 0)` is 0.
pub fn initial_bearing(from: &LatLon, to: &LatLon) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let d_lambda = (to.longitude() - from.longitude()).to_radians();

    let x = d_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    let theta = x.atan2(y).to_degrees();

    (theta + 360.0) % 360.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_latlon() -> impl Strategy<Value = LatLon> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| LatLon::new(lat, lon).unwrap())
    }

    proptest! {
        /// Distance is never negative
        #[test]
        fn distance_non_negative(a in any_latlon(), b in any_latlon()) {
            prop_assert!(haversine_km(&a, &b) >= 0.0);
        }

        /// Distance is symmetric
        #[test]
        fn distance_symmetric(a in any_latlon(), b in any_latlon()) {
            let ab = haversine_km(&a, &b);
            let ba = haversine_km(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// No two points on Earth are further apart than half the circumference
        #[test]
        fn distance_bounded_by_half_circumference(a in any_latlon(), b in any_latlon()) {
            let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
            prop_assert!(haversine_km(&a, &b) <= half_circumference + 1e-6);
        }

        /// Bearing always lands in [0, 360)
        #[test]
        fn bearing_in_range(a in any_latlon(), b in any_latlon()) {
            let bearing = initial_bearing(&a, &b);
            prop_assert!((0.0..360.0).contains(&bearing), "bearing: {}", bearing);
        }
    }
}
