//! Unit-price extraction from free-form price text.

use std::sync::LazyLock;

use regex::Regex;

/// `"3 for $6.00"`, `"2 for 5"`, `"2 FOR $5"`.
static MULTI_BUY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*for\s*\$?([0-9]+\.?[0-9]*)").expect("valid multi-buy regex")
});

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("valid number regex"));

/// Parses raw price text into a price per purchasable unit.
///
/// Rules, in order:
/// 1. `$` and `,` are stripped.
/// 2. Text mentioning `buy`, `get` and `free` (any case) is a promotion with
///    no defined unit price → `None`.
/// 3. `"N for T"` / `"N for $T"` → `T / N`.
/// 4. Otherwise the first number in the text.
///
/// Returns `None` for absent or empty input and for text with no number.
///
/// ```
/// use pricecmp_matcher::parse_price;
///
/// assert_eq!(parse_price("3 for $6.00"), Some(2.0));
/// assert_eq!(parse_price("$4.99"), Some(4.99));
/// assert_eq!(parse_price("Buy 1 Get 1 Free"), None);
/// ```
#[must_use]
pub fn parse_price<'a>(raw: impl Into<Option<&'a str>>) -> Option<f64> {
    let raw = raw.into()?;
    let cleaned = raw.replace(['$', ','], "");

    if is_promotion(&cleaned) {
        return None;
    }

    if let Some(per_unit) = multi_buy_price(&cleaned) {
        return Some(per_unit);
    }

    FIRST_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn is_promotion(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["buy", "get", "free"].iter().all(|word| lower.contains(word))
}

/// Total divided by quantity for a multi-buy offer. A zero quantity is not an
/// offer and yields `None` so the caller falls back to the first number.
fn multi_buy_price(text: &str) -> Option<f64> {
    let caps = MULTI_BUY.captures(text)?;
    let quantity = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let total = caps.get(2)?.as_str().parse::<f64>().ok()?;
    if quantity <= 0.0 {
        return None;
    }
    Some(total / quantity)
}
