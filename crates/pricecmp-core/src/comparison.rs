use serde::{Deserialize, Serialize};

/// Display text for a competitor with no acceptable match.
pub const NOT_FOUND: &str = "Not Found";

/// The best match for one reference product in one competitor store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreMatch {
    pub store: String,
    /// Original (pre-normalization) name of the matched listing.
    pub matched_name: Option<String>,
    /// Unit price of the matched listing, if it parsed.
    pub price: Option<f64>,
    /// Similarity score in `0..=100`; `0` when nothing matched.
    pub confidence: u8,
}

impl StoreMatch {
    /// A store entry for a product the store does not appear to carry.
    #[must_use]
    pub fn not_found(store: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            matched_name: None,
            price: None,
            confidence: 0,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.matched_name.is_some()
    }

    /// The matched name, or [`NOT_FOUND`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.matched_name.as_deref().unwrap_or(NOT_FOUND)
    }
}

/// The cheapest store for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowestPrice {
    pub store: String,
    pub price: f64,
}

/// How much cheaper the lowest price is than the reference store's price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub amount: f64,
    /// `amount` as a percentage of the reference price.
    pub percent: f64,
}

/// One row of the comparison table: a reference product and its best match in
/// every competitor store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub original_name: String,
    pub canonical_type: String,
    pub reference_store: String,
    pub reference_price: Option<f64>,
    /// Exactly one entry per competitor, in catalog-registration order.
    pub per_store: Vec<StoreMatch>,
    /// `None` when no store has a usable price.
    pub lowest: Option<LowestPrice>,
    /// `None` when the lowest price is not below the reference price.
    pub savings: Option<Savings>,
}

impl ComparisonRecord {
    /// Looks up the entry for `store`.
    #[must_use]
    pub fn store_match(&self, store: &str) -> Option<&StoreMatch> {
        self.per_store.iter().find(|m| m.store == store)
    }
}

/// Run-level totals over a set of [`ComparisonRecord`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total_products: usize,
    /// Number of products with a priced match, per competitor.
    pub found_per_store: Vec<(String, usize)>,
    /// Products whose cheapest competitor beats the reference price.
    pub products_with_savings: usize,
    pub total_savings: f64,
}

impl ComparisonSummary {
    #[must_use]
    pub fn average_savings(&self) -> Option<f64> {
        if self.products_with_savings == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let denom = self.products_with_savings as f64;
        Some(self.total_savings / denom)
    }
}
