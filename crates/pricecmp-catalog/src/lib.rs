//! File and network collaborators around the comparison engine: catalog
//! loading, report writing and brochure ingest.

pub mod brochure;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod report;
pub mod xlsx;

mod retry;

pub use brochure::{
    brochure_rows, load_brochure_document, load_field_mapping, write_brochure_csv, BrochureRow,
    FieldMapping, DEFAULT_MAX_ROWS,
};
pub use error::CatalogError;
pub use fetch::BrochureClient;
pub use loader::{load_catalog, read_listings};
pub use report::{save_csv_report, write_csv_report, ReportLayout};
pub use xlsx::save_xlsx_report;
