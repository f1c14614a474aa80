//! Assembly of the cross-store comparison table.

use pricecmp_core::{ComparisonRecord, LowestPrice, RawListing, Savings, StoreCatalog, StoreMatch};

use crate::matcher::{CandidatePool, RELAXED_THRESHOLD};
use crate::normalize::normalize;
use crate::price::parse_price;

/// Compares every reference listing against every competitor catalog.
///
/// Returns one record per reference listing, in input order. Each record has
/// exactly one [`StoreMatch`] per competitor, in the order `competitors` is
/// given. `threshold` is the primary match threshold; matching relaxes to
/// [`RELAXED_THRESHOLD`] on its own.
#[must_use]
pub fn build_comparison(
    reference: &StoreCatalog,
    competitors: &[StoreCatalog],
    threshold: u8,
) -> Vec<ComparisonRecord> {
    let pools: Vec<CandidatePool<'_>> = competitors
        .iter()
        .map(|catalog| CandidatePool::new(catalog.names()))
        .collect();

    tracing::debug!(
        reference = %reference.store,
        products = reference.len(),
        competitors = competitors.len(),
        threshold,
        "building comparison"
    );

    reference
        .listings
        .iter()
        .enumerate()
        .map(|(i, listing)| {
            let record = compare_listing(reference, listing, competitors, &pools, threshold);
            tracing::debug!(
                n = i + 1,
                total = reference.len(),
                product = %record.original_name,
                product_type = %record.canonical_type,
                "compared product"
            );
            record
        })
        .collect()
}

fn compare_listing(
    reference: &StoreCatalog,
    listing: &RawListing,
    competitors: &[StoreCatalog],
    pools: &[CandidatePool<'_>],
    threshold: u8,
) -> ComparisonRecord {
    let canonical_type = normalize(listing.name.as_str());
    let reference_price = parse_price(listing.price_text.as_str());

    let per_store: Vec<StoreMatch> = competitors
        .iter()
        .zip(pools)
        .map(|(catalog, pool)| match_in_store(catalog, pool, &canonical_type, threshold))
        .collect();

    let lowest = lowest_price(&reference.store, reference_price, &per_store);
    let savings = match (reference_price, &lowest) {
        (Some(reference_price), Some(lowest)) => savings_against(reference_price, lowest.price),
        _ => None,
    };

    ComparisonRecord {
        original_name: listing.name.clone(),
        canonical_type,
        reference_store: reference.store.clone(),
        reference_price,
        per_store,
        lowest,
        savings,
    }
}

fn match_in_store(
    catalog: &StoreCatalog,
    pool: &CandidatePool<'_>,
    canonical_type: &str,
    threshold: u8,
) -> StoreMatch {
    let result = pool.best_match(canonical_type, threshold);
    let Some(matched) = result.matched else {
        return StoreMatch::not_found(catalog.store.as_str());
    };
    if result.confidence < RELAXED_THRESHOLD {
        return StoreMatch::not_found(catalog.store.as_str());
    }

    let price = catalog
        .listings
        .get(matched.index)
        .and_then(|l| parse_price(l.price_text.as_str()));

    StoreMatch {
        store: catalog.store.clone(),
        matched_name: Some(matched.name.to_string()),
        price,
        confidence: result.confidence,
    }
}

/// Cheapest strictly positive price, reference store first, then competitors
/// in order. The first store seen keeps a tie.
fn lowest_price(
    reference_store: &str,
    reference_price: Option<f64>,
    per_store: &[StoreMatch],
) -> Option<LowestPrice> {
    let candidates = std::iter::once((reference_store, reference_price))
        .chain(per_store.iter().map(|m| (m.store.as_str(), m.price)));

    let mut lowest: Option<LowestPrice> = None;
    for (store, price) in candidates {
        let Some(price) = price.filter(|p| *p > 0.0) else {
            continue;
        };
        match &lowest {
            Some(current) if price >= current.price => {}
            _ => {
                lowest = Some(LowestPrice {
                    store: store.to_string(),
                    price,
                });
            }
        }
    }
    lowest
}

fn savings_against(reference_price: f64, lowest: f64) -> Option<Savings> {
    if lowest >= reference_price {
        return None;
    }
    let amount = reference_price - lowest;
    Some(Savings {
        amount,
        percent: amount / reference_price * 100.0,
    })
}
