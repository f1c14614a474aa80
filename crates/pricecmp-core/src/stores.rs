use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Where one store's catalog lives and which columns hold names and prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    pub path: PathBuf,
    pub name_column: String,
    pub price_column: String,
}

/// The store registry: one reference store and the competitors it is compared
/// against, in the order they should appear in reports.
#[derive(Debug, Clone, Deserialize)]
pub struct StoresFile {
    pub reference: StoreConfig,
    pub competitors: Vec<StoreConfig>,
    /// Directory the registry was loaded from; relative catalog paths resolve
    /// against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl StoresFile {
    /// Resolve a store's catalog path against the registry directory.
    #[must_use]
    pub fn resolve_path(&self, store: &StoreConfig) -> PathBuf {
        if store.path.is_absolute() {
            store.path.clone()
        } else {
            self.base_dir.join(&store.path)
        }
    }

    /// Reference store first, then competitors in registration order.
    pub fn all_stores(&self) -> impl Iterator<Item = &StoreConfig> {
        std::iter::once(&self.reference).chain(self.competitors.iter())
    }
}

/// Load and validate the store registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_stores(path: &Path) -> Result<StoresFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut stores_file: StoresFile = serde_yaml::from_str(&content)?;
    stores_file.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    validate_stores(&stores_file)?;

    Ok(stores_file)
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), ConfigError> {
    if stores_file.competitors.is_empty() {
        return Err(ConfigError::Validation(
            "at least one competitor store is required".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for store in stores_file.all_stores() {
        if store.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        if store.name_column.trim().is_empty() || store.price_column.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "store '{}' must name both a name_column and a price_column",
                store.name
            )));
        }

        if !seen_names.insert(store.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate store name: '{}'",
                store.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stores_test.rs"]
mod tests;
