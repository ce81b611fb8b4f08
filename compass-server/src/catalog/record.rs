//! Catalog record type.

use crate::domain::LatLon;

/// Display name used when a row carries no name at all.
pub(crate) const UNKNOWN_NAME: &str = "Unknown";

/// A single named restroom location.
///
/// Records are valid by construction: the coordinate is a checked
/// [`LatLon`] and the display name is already resolved (the loader
/// applies the `bathroom_name` → `name` → `"Unknown"` priority list).
#[derive(Debug, Clone, PartialEq)]
pub struct RestroomRecord {
    name: String,
    location: LatLon,
}

impl RestroomRecord {
    /// Create a record with an already-resolved display name.
    pub fn new(name: impl Into<String>, location: LatLon) -> Self {
        RestroomRecord {
            name: name.into(),
            location,
        }
    }

    /// Display name for this restroom.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    pub fn location(&self) -> &LatLon {
        &self.location
    }
}

/// Resolve a display name from the recognized fields, in priority order:
/// `bathroom_name`, then `name`, then the literal `"Unknown"`.
///
/// Empty cells count as absent.
pub(crate) fn resolve_name(bathroom_name: Option<&str>, name: Option<&str>) -> String {
    bathroom_name
        .filter(|s| !s.is_empty())
        .or(name.filter(|s| !s.is_empty()))
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}
