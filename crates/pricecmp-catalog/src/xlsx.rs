//! Spreadsheet report with the cheapest price and any savings highlighted.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use pricecmp_core::ComparisonRecord;

use crate::error::CatalogError;
use crate::report::{record_cells, Cell, ReportLayout};

pub const SHEET_NAME: &str = "Price Comparison by Type";

const MAX_COLUMN_WIDTH: usize = 50;

/// Background highlight for a report cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fill {
    /// Light green, on the cheapest price in the row.
    LowestPrice,
    /// Gold, on the savings cell when the saving is positive.
    Savings,
}

impl Fill {
    pub(crate) fn rgb(self) -> u32 {
        match self {
            Fill::LowestPrice => 0x0090_EE90,
            Fill::Savings => 0x00FF_D700,
        }
    }

    fn format(self) -> Format {
        Format::new().set_background_color(Color::RGB(self.rgb()))
    }
}

/// Which fill, if any, column `col` of `record`'s row gets.
pub(crate) fn cell_fill(
    layout: &ReportLayout,
    record: &ComparisonRecord,
    col: usize,
) -> Option<Fill> {
    let lowest = record.lowest.as_ref()?;
    if layout.price_column(&lowest.store) == Some(col) {
        return Some(Fill::LowestPrice);
    }
    let has_savings = record.savings.is_some_and(|s| s.amount > 0.0);
    (has_savings && col == layout.savings_column()).then_some(Fill::Savings)
}

/// Writes the comparison as an `.xlsx` workbook with a single sheet.
///
/// The lowest price in each row is filled light green; the savings cell is
/// filled gold when the saving is positive.
///
/// # Errors
///
/// Returns [`CatalogError::Xlsx`] if a cell cannot be written or the workbook
/// cannot be saved.
pub fn save_xlsx_report(
    path: &Path,
    layout: &ReportLayout,
    records: &[ComparisonRecord],
) -> Result<(), CatalogError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    let headers = layout.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, column_index(col), header)?;
    }

    let plain = Format::new();
    let lowest_fill = Fill::LowestPrice.format();
    let savings_fill = Fill::Savings.format();

    for (i, record) in records.iter().enumerate() {
        let row = row_index(i + 1);
        let cells = record_cells(layout, record);

        for (col, cell) in cells.iter().enumerate() {
            let format = match cell_fill(layout, record, col) {
                Some(Fill::LowestPrice) => &lowest_fill,
                Some(Fill::Savings) => &savings_fill,
                None => &plain,
            };
            write_cell(worksheet, row, column_index(col), cell, format)?;

            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.display().chars().count());
            }
        }
    }

    for (col, width) in widths.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let width = (width + 2).min(MAX_COLUMN_WIDTH) as f64;
        worksheet.set_column_width(column_index(col), width)?;
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = records.len(), "saved spreadsheet report");
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: &Format,
) -> Result<(), CatalogError> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        Cell::Number(n) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
        Cell::Empty => {
            worksheet.write_blank(row, col, format)?;
        }
    }
    Ok(())
}

// Indexes past the sheet limits saturate and are rejected by the writer.
fn row_index(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

fn column_index(i: usize) -> u16 {
    u16::try_from(i).unwrap_or(u16::MAX)
}
