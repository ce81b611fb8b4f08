//! Nearest-restroom resolution.
//!
//! A pure function from (query coordinate, catalog) to the catalog
//! entry at minimum great-circle distance, plus how far away it is and
//! which way to walk. Deliberately a full linear scan per call: the
//! catalog holds tens to low hundreds of rows and queries are
//! human-triggered, so a spatial index would be engineering for a
//! problem that doesn't exist here.

use crate::catalog::{Catalog, RestroomRecord};
use crate::domain::{InvalidCoordinate, LatLon};
use crate::geo::{haversine_ft, initial_bearing};

/// Errors that a resolution attempt can surface to the caller.
///
/// Both are explicit failures: a query against an empty catalog must
/// never produce a fabricated result, and out-of-range coordinates are
/// rejected rather than clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The catalog holds no records, so no nearest point exists
    #[error("no restrooms in catalog")]
    NoCandidates,

    /// The query coordinate is out of range
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidCoordinate),
}

/// The nearest restroom to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestResult {
    /// Display name of the restroom
    pub name: String,

    /// Great-circle distance from the query point, in feet
    pub distance_ft: f64,

    /// Initial compass bearing from the query point, degrees in [0, 360)
    pub bearing: f64,
}

/// Find the catalog entry nearest to `(latitude, longitude)`.
///
/// Raw coordinates are validated here; out-of-range input fails with
/// [`ResolveError::InvalidQuery`]. Entries at exactly equal minimal
/// distance resolve to the first one in catalog order, every time.
pub fn resolve_nearest(
    catalog: &Catalog,
    latitude: f64,
    longitude: f64,
) -> Result<NearestResult, ResolveError> {
    let query = LatLon::new(latitude, longitude)?;

    let mut best: Option<(&RestroomRecord, f64)> = None;

    for record in catalog.iter() {
        let distance_ft = haversine_ft(&query, record.location());
        // Strict comparison keeps the earliest entry on ties
        if best.is_none_or(|(_, best_ft)| distance_ft < best_ft) {
            best = Some((record, distance_ft));
        }
    }

    let (record, distance_ft) = best.ok_or(ResolveError::NoCandidates)?;

    Ok(NearestResult {
        name: record.name().to_string(),
        distance_ft,
        bearing: initial_bearing(&query, record.location()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lat: f64, lon: f64) -> RestroomRecord {
        RestroomRecord::new(name, LatLon::new(lat, lon).unwrap())
    }

    fn two_point_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("A", 41.7886, -87.5987),
            record("B", 41.7900, -87.6000),
        ])
    }

    #[test]
    fn query_at_a_record_returns_it_with_zero_distance() {
        let catalog = two_point_catalog();
        let result = resolve_nearest(&catalog, 41.7886, -87.5987).unwrap();

        assert_eq!(result.name, "A");
        assert!(result.distance_ft.abs() < 1e-6, "{}", result.distance_ft);
    }

    #[test]
    fn picks_the_true_minimum() {
        let catalog = Catalog::from_records(vec![
            record("Far", 42.0, -88.0),
            record("Near", 41.789, -87.599),
            record("Medium", 41.8, -87.62),
        ]);

        let result = resolve_nearest(&catalog, 41.7886, -87.5987).unwrap();
        assert_eq!(result.name, "Near");

        // Cross-check against an exhaustive scan
        let query = LatLon::new(41.7886, -87.5987).unwrap();
        let min_ft = catalog
            .iter()
            .map(|r| haversine_ft(&query, r.location()))
            .fold(f64::INFINITY, f64::min);
        assert!((result.distance_ft - min_ft).abs() <= 1e-6 * min_ft.max(1.0));
    }

    #[test]
    fn ties_resolve_to_the_first_in_catalog_order() {
        // Two records at the same coordinates: identical distance from
        // anywhere. Must pick the first, on every call.
        let catalog = Catalog::from_records(vec![
            record("First", 41.79, -87.60),
            record("Duplicate", 41.79, -87.60),
        ]);

        for _ in 0..10 {
            let result = resolve_nearest(&catalog, 41.80, -87.61).unwrap();
            assert_eq!(result.name, "First");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = two_point_catalog();
        let first = resolve_nearest(&catalog, 41.7950, -87.6050).unwrap();
        let second = resolve_nearest(&catalog, 41.7950, -87.6050).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bearing_is_in_range() {
        let catalog = two_point_catalog();
        let result = resolve_nearest(&catalog, 41.7950, -87.6050).unwrap();
        assert!((0.0..360.0).contains(&result.bearing));
    }

    #[test]
    fn bearing_points_north_to_a_northern_restroom() {
        let catalog = Catalog::from_records(vec![record("North", 41.7890, -87.6000)]);
        let result = resolve_nearest(&catalog, 41.7800, -87.6000).unwrap();
        assert!(result.bearing.abs() < 1e-6, "{}", result.bearing);
    }

    #[test]
    fn empty_catalog_is_no_candidates() {
        let catalog = Catalog::default();
        assert_eq!(
            resolve_nearest(&catalog, 41.7886, -87.5987),
            Err(ResolveError::NoCandidates)
        );
    }

    #[test]
    fn out_of_range_query_is_invalid() {
        let catalog = two_point_catalog();

        let result = resolve_nearest(&catalog, 91.0, -87.5987);
        assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));

        let result = resolve_nearest(&catalog, 41.7886, -181.0);
        assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));
    }

    #[test]
    fn invalid_query_beats_no_candidates() {
        // A malformed query against an empty catalog reports the query
        // problem, not the catalog one.
        let catalog = Catalog::default();
        let result = resolve_nearest(&catalog, 91.0, 0.0);
        assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));
    }

    #[test]
    fn error_display() {
        assert_eq!(ResolveError::NoCandidates.to_string(), "no restrooms in catalog");

        let err = resolve_nearest(&Catalog::default(), 95.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid query: latitude 95 out of range [-90, 90]"
        );
    }
}
