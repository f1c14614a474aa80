//! Conversion of brochure JSON into catalog CSV rows.
//!
//! Brochure feeds differ in shape, so each output field is read through an
//! ordered list of dotted JSON paths ([`FieldMapping`]). The first path that
//! resolves to a non-null value wins.
//!
//! The price column is composed from the label parts around the amount, so
//! `"2 for"` + `"5.00"` becomes `"2 for $5.00"`, and the unit price is
//! derived from it unless the mapping reads one directly.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Output columns, in order. `name` and `price` make the file loadable as a
/// catalog.
pub const BROCHURE_HEADERS: [&str; 5] =
    ["name", "description", "price", "price_per_unit", "category"];

/// Dotted JSON paths tried, in order, for each output column.
///
/// `pre_price` and `post_price` are the label text around the amount read
/// through `price`. `price_per_unit` is usually left empty so the unit price
/// is derived; paths given there are used as-is when they resolve. A mapping
/// file may omit fields; an omitted field is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub pre_price: Vec<String>,
    #[serde(default)]
    pub price: Vec<String>,
    #[serde(default)]
    pub post_price: Vec<String>,
    #[serde(default)]
    pub price_per_unit: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        let paths =
            |keys: &[&str]| -> Vec<String> { keys.iter().map(|k| (*k).to_string()).collect() };
        Self {
            name: paths(&["name"]),
            description: paths(&["description", "sale_story"]),
            pre_price: paths(&["pre_price_text"]),
            price: paths(&["price_text"]),
            post_price: paths(&["post_price_text"]),
            price_per_unit: Vec::new(),
            category: paths(&["categories"]),
        }
    }
}

/// One converted brochure item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrochureRow {
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_per_unit: String,
    pub category: String,
}

impl BrochureRow {
    fn from_item(item: &Value, mapping: &FieldMapping) -> Self {
        let pre = extract_field(item, &mapping.pre_price);
        let amount = extract_field(item, &mapping.price);
        let post = extract_field(item, &mapping.post_price);

        let mapped_unit = extract_field(item, &mapping.price_per_unit);
        let price_per_unit = if mapped_unit.is_empty() {
            unit_price_text(&pre, &amount)
        } else {
            mapped_unit
        };

        Self {
            name: extract_field(item, &mapping.name),
            description: extract_field(item, &mapping.description),
            price: compose_price(&pre, &amount, &post),
            price_per_unit,
            category: extract_field(item, &mapping.category),
        }
    }

    fn as_record(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.price.as_str(),
            self.price_per_unit.as_str(),
            self.category.as_str(),
        ]
    }
}

/// Loads a [`FieldMapping`] from a JSON file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, or
/// [`CatalogError::Deserialize`] if it is not a valid mapping.
pub fn load_field_mapping(path: &Path) -> Result<FieldMapping, CatalogError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::Deserialize {
        context: format!("field mapping {}", path.display()),
        source: e,
    })
}

/// Reads a brochure JSON document from disk.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] or [`CatalogError::Deserialize`].
pub fn load_brochure_document(path: &Path) -> Result<Value, CatalogError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::Deserialize {
        context: format!("brochure {}", path.display()),
        source: e,
    })
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Converts up to `max_rows` brochure items into rows, dropping items with no
/// price.
///
/// The document is either a list of items or an object wrapping the list in
/// its first array-valued field (`{"data": [...]}`).
///
/// # Errors
///
/// Returns [`CatalogError::NoItems`] if no item list can be found.
pub fn brochure_rows(
    document: &Value,
    mapping: &FieldMapping,
    max_rows: usize,
) -> Result<Vec<BrochureRow>, CatalogError> {
    let items = item_list(document).ok_or(CatalogError::NoItems)?;

    let rows: Vec<BrochureRow> = items
        .iter()
        .take(max_rows)
        .map(|item| BrochureRow::from_item(item, mapping))
        .filter(|row| !row.price.is_empty())
        .collect();

    tracing::debug!(
        items = items.len(),
        rows = rows.len(),
        max_rows,
        "converted brochure items"
    );
    Ok(rows)
}

fn item_list(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(items) => Some(items),
        Value::Object(fields) => fields.values().find_map(Value::as_array),
        _ => None,
    }
}

/// Writes rows as CSV under [`BROCHURE_HEADERS`].
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] if a row cannot be written.
pub fn write_brochure_csv<W: Write>(writer: W, rows: &[BrochureRow]) -> Result<(), CatalogError> {
    let csv_err = |e: csv::Error| CatalogError::Csv {
        path: "brochure".to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(BROCHURE_HEADERS).map_err(csv_err)?;
    for row in rows {
        writer.write_record(row.as_record()).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| CatalogError::Io {
        path: "brochure".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Full price label: `"<pre> $<amount> <post>"`, skipping empty parts.
///
/// An empty amount gives an empty label, whatever surrounds it.
fn compose_price(pre: &str, amount: &str, post: &str) -> String {
    if amount.is_empty() {
        return String::new();
    }
    let amount = dollars(amount);
    [pre, amount.as_str(), post]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unit price for the label.
///
/// A multi-buy prefix (`"2 for"`) divides a numeric amount by the count and
/// renders it to the cent; a prefix that cannot be read that way gives `""`.
/// Without one the amount itself is the unit price.
fn unit_price_text(pre: &str, amount: &str) -> String {
    if amount.is_empty() {
        return String::new();
    }

    let lower = pre.to_lowercase();
    let Some(count) = lower.trim_end().strip_suffix("for") else {
        return dollars(amount);
    };

    let count = count.trim().parse::<u32>().ok().filter(|&n| n > 0);
    let total = amount.trim_start_matches('$').parse::<f64>().ok();
    match (count, total) {
        (Some(count), Some(total)) => format!("${:.2}", total / f64::from(count)),
        _ => String::new(),
    }
}

fn dollars(amount: &str) -> String {
    if amount.starts_with('$') {
        amount.to_string()
    } else {
        format!("${amount}")
    }
}

/// Text of the first path in `paths` that resolves, or `""`.
fn extract_field(item: &Value, paths: &[String]) -> String {
    paths
        .iter()
        .find_map(|path| resolve_path(item, path))
        .unwrap_or_default()
}

/// Follows a dotted path through `item`.
///
/// An array met before the last segment stands for its first element. A
/// missing key, an empty array on the way, or a final `null` resolves to
/// nothing.
fn resolve_path(item: &Value, path: &str) -> Option<String> {
    let mut current = item;
    for segment in path.split('.') {
        if let Value::Array(items) = current {
            current = items.first()?;
        }
        current = current.as_object()?.get(segment)?;
    }

    match current {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "brochure_test.rs"]
mod tests;
