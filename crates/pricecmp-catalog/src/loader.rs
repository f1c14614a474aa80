//! CSV catalog loading.

use std::io::Read;
use std::path::Path;

use pricecmp_core::{RawListing, StoreCatalog, StoreConfig};

use crate::error::CatalogError;

/// Loads one store's catalog from `path`, already resolved by
/// [`pricecmp_core::StoresFile::resolve_path`].
///
/// # Errors
///
/// - [`CatalogError::Io`] if the file cannot be opened.
/// - [`CatalogError::Csv`] if a row cannot be read.
/// - [`CatalogError::MissingColumn`] if the header lacks either configured column.
pub fn load_catalog(store: &StoreConfig, path: &Path) -> Result<StoreCatalog, CatalogError> {
    let source = path.display().to_string();

    let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
        path: source.clone(),
        source: e,
    })?;
    let listings = read_listings(file, &source, &store.name_column, &store.price_column)?;

    tracing::info!(
        store = %store.name,
        path = %source,
        count = listings.len(),
        "loaded catalog"
    );

    Ok(StoreCatalog::new(store.name.as_str(), listings))
}

/// Reads name/price pairs from CSV with a header row.
///
/// Columns are located by header text (surrounding whitespace ignored). Rows
/// may be ragged; a missing cell reads as an empty string. `source` only
/// labels errors.
///
/// # Errors
///
/// Returns [`CatalogError::MissingColumn`] if either column is absent from the
/// header, or [`CatalogError::Csv`] on malformed input.
pub fn read_listings<R: Read>(
    reader: R,
    source: &str,
    name_column: &str,
    price_column: &str,
) -> Result<Vec<RawListing>, CatalogError> {
    let csv_err = |e: csv::Error| CatalogError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let column_index = |column: &str| -> Result<usize, CatalogError> {
        headers
            .iter()
            .position(|h| h.trim() == column.trim())
            .ok_or_else(|| CatalogError::MissingColumn {
                path: source.to_string(),
                column: column.to_string(),
            })
    };
    let name_idx = column_index(name_column)?;
    let price_idx = column_index(price_column)?;

    let mut listings = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        listings.push(RawListing::new(cell(name_idx), cell(price_idx)));
    }

    Ok(listings)
}
