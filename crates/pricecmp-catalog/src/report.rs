//! Tabular rendering of comparison records and the CSV report.

use std::io::Write;
use std::path::Path;

use pricecmp_core::{ComparisonRecord, StoreMatch, NOT_FOUND};

use crate::error::CatalogError;

pub(crate) const NO_PRICES_FOUND: &str = "No prices found";
pub(crate) const NO_SAVINGS: &str = "No savings";
pub(crate) const NO_COMPARISON: &str = "No comparison";

/// Store names that determine the report's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub reference: String,
    pub competitors: Vec<String>,
}

impl ReportLayout {
    pub fn new<I, S>(reference: impl Into<String>, competitors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference: reference.into(),
            competitors: competitors.into_iter().map(Into::into).collect(),
        }
    }

    /// Column headers, in output order.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![
            "Original_Product_Name".to_string(),
            "Product_Type".to_string(),
            format!("{}_Price", self.reference),
        ];
        for store in &self.competitors {
            headers.push(format!("{store}_Product"));
            headers.push(format!("{store}_Price"));
            headers.push(format!("{store}_Confidence"));
        }
        headers.push("Lowest_Price_Store".to_string());
        headers.push(format!("Savings_vs_{}", self.reference));
        headers
    }

    /// Zero-based column holding `store`'s price, reference included.
    pub(crate) fn price_column(&self, store: &str) -> Option<usize> {
        if store == self.reference {
            return Some(2);
        }
        self.competitors
            .iter()
            .position(|s| s == store)
            .map(|i| 4 + i * 3)
    }

    pub(crate) fn lowest_column(&self) -> usize {
        3 + self.competitors.len() * 3
    }

    pub(crate) fn savings_column(&self) -> usize {
        self.lowest_column() + 1
    }
}

/// One report cell before it is written out.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn price(price: Option<f64>) -> Self {
        price.map_or(Cell::Empty, Cell::Number)
    }

    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Cells of one record, aligned with [`ReportLayout::headers`].
pub(crate) fn record_cells(layout: &ReportLayout, record: &ComparisonRecord) -> Vec<Cell> {
    let mut cells = vec![
        Cell::Text(record.original_name.clone()),
        Cell::Text(record.canonical_type.clone()),
        Cell::price(record.reference_price),
    ];

    for store in &layout.competitors {
        match record.store_match(store) {
            Some(m) => push_match(&mut cells, m),
            None => {
                cells.push(Cell::Text(NOT_FOUND.to_string()));
                cells.push(Cell::Empty);
                cells.push(Cell::Number(0.0));
            }
        }
    }

    cells.push(Cell::Text(lowest_text(record)));
    cells.push(Cell::Text(savings_text(record)));
    cells
}

fn push_match(cells: &mut Vec<Cell>, m: &StoreMatch) {
    cells.push(Cell::Text(m.display_name().to_string()));
    cells.push(Cell::price(m.price));
    cells.push(Cell::Number(f64::from(m.confidence)));
}

/// `"Aldi ($2.09)"`, or [`NO_PRICES_FOUND`].
pub(crate) fn lowest_text(record: &ComparisonRecord) -> String {
    match &record.lowest {
        Some(lowest) => format!("{} (${:.2})", lowest.store, lowest.price),
        None => NO_PRICES_FOUND.to_string(),
    }
}

/// `"$1.20 (36.5%)"`, [`NO_SAVINGS`], or [`NO_COMPARISON`] when nothing had a
/// price.
pub(crate) fn savings_text(record: &ComparisonRecord) -> String {
    match (&record.lowest, record.savings) {
        (None, _) => NO_COMPARISON.to_string(),
        (Some(_), Some(savings)) => format!("${:.2} ({:.1}%)", savings.amount, savings.percent),
        (Some(_), None) => NO_SAVINGS.to_string(),
    }
}

/// Writes the comparison as CSV: one header row, then one row per record.
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] if a row cannot be written.
pub fn write_csv_report<W: Write>(
    writer: W,
    layout: &ReportLayout,
    records: &[ComparisonRecord],
) -> Result<(), CatalogError> {
    let csv_err = |e: csv::Error| CatalogError::Csv {
        path: "report".to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(layout.headers()).map_err(csv_err)?;
    for record in records {
        let row: Vec<String> = record_cells(layout, record)
            .iter()
            .map(Cell::display)
            .collect();
        writer.write_record(&row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| CatalogError::Io {
        path: "report".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Writes the CSV report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be created, or any error of
/// [`write_csv_report`].
pub fn save_csv_report(
    path: &Path,
    layout: &ReportLayout,
    records: &[ComparisonRecord],
) -> Result<(), CatalogError> {
    let file = std::fs::File::create(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_csv_report(file, layout, records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "saved CSV report");
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
