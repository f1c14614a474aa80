//! Run-level totals over a finished comparison.

use pricecmp_core::{ComparisonRecord, ComparisonSummary};

/// Counts priced matches per competitor and totals the savings available
/// against the reference store.
///
/// Savings here compare the cheapest positive *competitor* price with the
/// reference price, so a product counts only when some competitor actually
/// undercuts the reference store. Store order follows the first record.
#[must_use]
pub fn summarize(records: &[ComparisonRecord]) -> ComparisonSummary {
    let mut found_per_store: Vec<(String, usize)> = records
        .first()
        .map(|record| {
            record
                .per_store
                .iter()
                .map(|m| (m.store.clone(), 0))
                .collect()
        })
        .unwrap_or_default();

    let mut products_with_savings = 0;
    let mut total_savings = 0.0;

    for record in records {
        for (store, count) in &mut found_per_store {
            if record
                .store_match(store)
                .is_some_and(|m| m.price.is_some())
            {
                *count += 1;
            }
        }

        let Some(reference_price) = record.reference_price else {
            continue;
        };
        let cheapest_competitor = record
            .per_store
            .iter()
            .filter_map(|m| m.price)
            .filter(|p| *p > 0.0)
            .reduce(f64::min);
        if let Some(cheapest) = cheapest_competitor {
            if cheapest < reference_price {
                products_with_savings += 1;
                total_savings += reference_price - cheapest;
            }
        }
    }

    ComparisonSummary {
        total_products: records.len(),
        found_per_store,
        products_with_savings,
        total_savings,
    }
}
