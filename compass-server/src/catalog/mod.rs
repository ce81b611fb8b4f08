//! The restroom catalog.
//!
//! An immutable, ordered table of named geographic points, built once
//! from a CSV file at startup and shared read-only by all request
//! handling thereafter.

mod error;
mod loader;
mod record;

pub use error::CatalogError;
pub use loader::{load_from_path, load_from_reader};
pub use record::RestroomRecord;

/// The loaded catalog: an ordered, immutable sequence of restrooms.
///
/// Row order is input order (after dropping unparseable rows), and is
/// significant: nearest-point ties resolve to the earliest entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<RestroomRecord>,
}

impl Catalog {
    /// Build a catalog from already-validated records.
    pub fn from_records(records: Vec<RestroomRecord>) -> Self {
        Catalog { records }
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[RestroomRecord] {
        &self.records
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RestroomRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
