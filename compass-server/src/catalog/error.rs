//! Catalog load error types.

/// Errors that can occur while loading the catalog.
///
/// Note that individual rows with unparseable coordinates are *not*
/// errors: they are silently dropped during load. These errors cover
/// problems with the file itself.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Could not read the catalog file
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row entirely
    #[error("required column '{0}' not found in catalog header")]
    MissingColumn(&'static str),
}
