//! Geographic coordinate types.

use std::fmt;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// Latitude outside [-90, 90] or not a finite number
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),

    /// Longitude outside [-180, 180] or not a finite number
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

/// A validated geographic coordinate in decimal degrees.
///
/// Latitude is guaranteed to lie in [-90, 90] and longitude in
/// [-180, 180]; both are finite. Any `LatLon` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use compass_server::domain::LatLon;
///
/// let point = LatLon::new(41.7886, -87.5987).unwrap();
/// assert_eq!(point.latitude(), 41.7886);
///
/// // Out-of-range values are rejected, not clamped
/// assert!(LatLon::new(91.0, 0.0).is_err());
/// assert!(LatLon::new(0.0, -180.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl LatLon {
    /// Construct a coordinate, rejecting out-of-range or non-finite input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::Longitude(longitude));
        }

        Ok(LatLon {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLon({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
