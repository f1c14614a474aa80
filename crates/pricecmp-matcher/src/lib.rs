//! Product-identity resolution for cross-store price comparison.
//!
//! The pieces, leaf first:
//! - [`price::parse_price`] turns raw price text into a unit price.
//! - [`normalize::normalize`] reduces a product name to its product type.
//! - [`matcher::find_best_match`] finds the closest candidate by token-sort
//!   similarity, relaxing the threshold once.
//! - [`compare::build_comparison`] runs all three over a reference catalog
//!   and its competitors.
//!
//! Nothing here does I/O or returns errors: bad input degrades to "no price"
//! or "no match".

pub mod compare;
pub mod matcher;
pub mod normalize;
pub mod price;
pub mod similarity;
pub mod summary;

mod lexicon;

pub use compare::build_comparison;
pub use matcher::{
    find_best_match, CandidatePool, MatchResult, MatchedCandidate, DEFAULT_THRESHOLD,
    RELAXED_THRESHOLD,
};
pub use normalize::normalize;
pub use price::parse_price;
pub use similarity::token_sort_ratio;
pub use summary::summarize;
