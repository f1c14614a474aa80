//! Shared domain types and configuration for `pricecmp`.
//!
//! Everything the matcher, the catalog I/O crate and the CLI agree on lives
//! here: raw listings, comparison records, the store registry and the
//! env-driven application config.

pub mod app_config;
pub mod comparison;
pub mod config;
pub mod listing;
pub mod stores;

use thiserror::Error;

pub use app_config::AppConfig;
pub use comparison::{
    ComparisonRecord, ComparisonSummary, LowestPrice, Savings, StoreMatch, NOT_FOUND,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{RawListing, StoreCatalog};
pub use stores::{load_stores, StoreConfig, StoresFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stores file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stores file: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    #[error("invalid stores configuration: {0}")]
    Validation(String),
}
