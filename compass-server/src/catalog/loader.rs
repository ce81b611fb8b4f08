//! CSV catalog loader.
//!
//! Reads the restroom spreadsheet once at startup. Column labels are
//! matched after normalization (trim, lowercase, spaces to underscores)
//! so `"Bathroom Name"`, `"bathroom name"` and `"bathroom_name"` all
//! name the same field. Rows whose coordinates fail to parse are
//! dropped, not reported: the catalog is a best-effort view of a
//! hand-maintained spreadsheet.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::domain::LatLon;

use super::error::CatalogError;
use super::record::{RestroomRecord, resolve_name};
use super::Catalog;

/// Normalize a column label to a field key.
fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Positions of the recognized columns in the header row.
struct Columns {
    bathroom_name: Option<usize>,
    name: Option<usize>,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn find(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let position = |key: &str| {
            headers
                .iter()
                .position(|h| normalize_header(h) == key)
        };

        Ok(Columns {
            bathroom_name: position("bathroom_name"),
            name: position("name"),
            latitude: position("latitude").ok_or(CatalogError::MissingColumn("latitude"))?,
            longitude: position("longitude").ok_or(CatalogError::MissingColumn("longitude"))?,
        })
    }
}

/// Load the catalog from a CSV file on disk.
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    info!("loading restroom catalog from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Load the catalog from any CSV source.
///
/// The first row is the header. Rows with a non-numeric, empty, or
/// missing latitude or longitude are dropped; so are rows whose
/// coordinates fall outside the valid degree ranges. A catalog with
/// zero rows is a valid (if unhelpful) result, not an error.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    // Flexible: a short row reads as missing cells and gets dropped,
    // rather than failing the whole load
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = Columns::find(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, result) in csv_reader.records().enumerate() {
        let row = result?;

        let parse_cell = |idx: usize| row.get(idx).and_then(|s| s.trim().parse::<f64>().ok());

        let parsed = parse_cell(columns.latitude)
            .zip(parse_cell(columns.longitude))
            .and_then(|(lat, lon)| LatLon::new(lat, lon).ok());

        let Some(location) = parsed else {
            debug!("dropping catalog row {}: unparseable coordinates", row_idx + 1);
            skipped += 1;
            continue;
        };

        let name = resolve_name(
            columns.bathroom_name.and_then(|i| row.get(i)),
            columns.name.and_then(|i| row.get(i)),
        );
        records.push(RestroomRecord::new(name, location));
    }

    info!(
        "loaded {} restrooms ({} rows dropped)",
        records.len(),
        skipped
    );

    Ok(Catalog::from_records(records))
}
