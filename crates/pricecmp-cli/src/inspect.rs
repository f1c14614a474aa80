//! One-off inspection commands for tuning the lexicon.

pub(crate) fn run_normalize(names: &[String]) {
    for name in names {
        println!("{name} -> {}", pricecmp_matcher::normalize(name.as_str()));
    }
}

pub(crate) fn run_price(texts: &[String]) {
    for text in texts {
        println!("{text} -> {}", format_price(text));
    }
}

fn format_price(text: &str) -> String {
    pricecmp_matcher::parse_price(text).map_or_else(|| "-".to_string(), |p| p.to_string())
}
