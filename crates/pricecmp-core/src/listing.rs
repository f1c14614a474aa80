use serde::{Deserialize, Serialize};

/// One row of one store's catalog, exactly as loaded.
///
/// A missing cell in the source file is represented as an empty string; an
/// empty `price_text` parses to no price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: String,
    pub price_text: String,
}

impl RawListing {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
        }
    }
}

/// A store's full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCatalog {
    pub store: String,
    pub listings: Vec<RawListing>,
}

impl StoreCatalog {
    pub fn new(store: impl Into<String>, listings: Vec<RawListing>) -> Self {
        Self {
            store: store.into(),
            listings,
        }
    }

    /// Product names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
