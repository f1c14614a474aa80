//! Reduction of raw product names to a comparable product type.
//!
//! `"Nathan's Beef Franks 12 oz"` and `"Oscar Mayer Wieners 16 oz"` both
//! become `"hot dogs"`. The steps run in a fixed order because each one assumes
//! the cleanup done by the previous:
//!
//! 1. lowercase
//! 2. drop brand names ([`crate::lexicon::BRANDS`])
//! 3. drop size, count, price and parenthesized tokens
//! 4. drop non-distinguishing descriptors ([`crate::lexicon::DESCRIPTORS`])
//! 5. punctuation to spaces, collapse whitespace
//! 6. rewrite known variants to a standard type ([`crate::lexicon::PRODUCT_MAPPINGS`])

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{BRANDS, DESCRIPTORS, PRODUCT_MAPPINGS};

/// Size and quantity patterns, applied in order.
static SIZE_PATTERNS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        Regex::new(
            r"\d+\.?\d*\s*(oz|lb|ct|count|pk|pack|gallon|btl|bottle|jar|pkg|package|jug|liter|fl oz|quart|pint)",
        )
        .expect("valid size regex"),
        Regex::new(r"\d+\s*(pack|ct|count|piece|pieces)").expect("valid count regex"),
        Regex::new(r"\([^)]*\)").expect("valid parenthesis regex"),
        Regex::new(r"\d+\s*-\s*\d+").expect("valid range regex"),
        Regex::new(r"apx\s*\d+\.?\d*").expect("valid approximate-weight regex"),
        Regex::new(r"\$\d+\.?\d*").expect("valid dollar regex"),
    ]
});

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));

/// Normalizes a raw product name into its product type.
///
/// Accepts `&str` or `Option<&str>`; `None` yields an empty string. The
/// result may also be empty when every token of the name was removable, and
/// an empty type never matches anything.
///
/// ```
/// use pricecmp_matcher::normalize;
///
/// assert_eq!(normalize("Nathan's Beef Franks 12 oz"), "hot dogs");
/// assert_eq!(normalize(None), "");
/// ```
#[must_use]
pub fn normalize<'a>(raw_name: impl Into<Option<&'a str>>) -> String {
    let Some(raw_name) = raw_name.into() else {
        return String::new();
    };

    let name = raw_name.to_lowercase();
    let name = remove_terms(name.trim().to_string(), BRANDS);
    let name = strip_sizes(&name);
    let name = remove_terms(name, DESCRIPTORS);
    let name = collapse_punctuation(&name);

    apply_mapping(name).trim().to_string()
}

/// Removes every occurrence of each term, in list order, trimming after each
/// removal.
fn remove_terms(mut name: String, terms: &[&str]) -> String {
    for term in terms {
        if name.contains(*term) {
            name = name.replace(*term, "").trim().to_string();
        }
    }
    name
}

fn strip_sizes(name: &str) -> String {
    SIZE_PATTERNS
        .iter()
        .fold(name.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

fn collapse_punctuation(name: &str) -> String {
    PUNCTUATION
        .replace_all(name, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces the whole name with the standard type of the first variant it
/// contains. Only one mapping ever applies.
fn apply_mapping(name: String) -> String {
    match PRODUCT_MAPPINGS
        .iter()
        .find(|(variant, _)| name.contains(*variant))
    {
        Some((_, standard)) => (*standard).to_string(),
        None => name,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
