//! Best-candidate search over one store's catalog.

use crate::normalize::normalize;
use crate::similarity::{ratio, sort_tokens};

/// Primary similarity threshold for accepting a match.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Fallback threshold tried once when nothing reaches the primary one.
pub const RELAXED_THRESHOLD: u8 = 60;

/// A candidate that won the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedCandidate<'a> {
    /// Position of the candidate in the pool's input order.
    pub index: usize,
    /// The candidate's original, pre-normalization name.
    pub name: &'a str,
}

/// Outcome of matching one product type against one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub matched: Option<MatchedCandidate<'a>>,
    /// `0` whenever `matched` is `None`.
    pub confidence: u8,
}

impl MatchResult<'static> {
    pub const NO_MATCH: Self = Self {
        matched: None,
        confidence: 0,
    };
}

impl MatchResult<'_> {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.matched.map(|m| m.name)
    }
}

/// Candidate names with their normalized, token-sorted forms computed once.
///
/// The orchestrator builds one pool per competitor and queries it for every
/// reference product.
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    names: Vec<&'a str>,
    keys: Vec<String>,
}

impl<'a> CandidatePool<'a> {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&'a str> = names.into_iter().collect();
        let keys = names
            .iter()
            .map(|name| sort_tokens(&normalize(*name)))
            .collect();
        Self { names, keys }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Finds the candidate whose product type is most similar to `canonical`.
    ///
    /// The best score is accepted at `threshold`; failing that, and only when
    /// `threshold` is above [`RELAXED_THRESHOLD`], it is accepted at the
    /// relaxed level. Ties keep the earliest candidate.
    #[must_use]
    pub fn best_match(&self, canonical: &str, threshold: u8) -> MatchResult<'a> {
        if canonical.is_empty() || self.is_empty() {
            return MatchResult::NO_MATCH;
        }

        let query = sort_tokens(canonical);
        if query.is_empty() {
            return MatchResult::NO_MATCH;
        }

        let Some((index, score)) = self.top_scoring(&query) else {
            return MatchResult::NO_MATCH;
        };

        for level in threshold_levels(threshold) {
            if score >= level {
                return MatchResult {
                    matched: Some(MatchedCandidate {
                        index,
                        name: self.names[index],
                    }),
                    confidence: score,
                };
            }
            tracing::trace!(canonical, score, level, "best candidate below threshold");
        }

        MatchResult::NO_MATCH
    }

    /// Index and score of the first highest-scoring candidate.
    fn top_scoring(&self, query: &str) -> Option<(usize, u8)> {
        let mut best: Option<(usize, u8)> = None;
        for (index, key) in self.keys.iter().enumerate() {
            let score = ratio(query, key);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }
}

/// The thresholds tried in order: `threshold`, then [`RELAXED_THRESHOLD`] when
/// that is lower. Never more than two levels.
#[must_use]
pub fn threshold_levels(threshold: u8) -> impl Iterator<Item = u8> {
    let relaxed = (threshold > RELAXED_THRESHOLD).then_some(RELAXED_THRESHOLD);
    std::iter::once(threshold).chain(relaxed)
}

/// Matches `canonical` against raw candidate names, normalizing each one.
///
/// Builds a throwaway [`CandidatePool`]; callers matching many products
/// against the same candidates should build the pool once instead.
///
/// ```
/// use pricecmp_matcher::find_best_match;
///
/// let result = find_best_match("hot dogs", &["Beef Franks 12ct", "Turkey Bacon"], 70);
/// assert_eq!(result.name(), Some("Beef Franks 12ct"));
/// assert!(result.confidence >= 70);
/// ```
#[must_use]
pub fn find_best_match<'a, S>(
    canonical: &str,
    candidates: &'a [S],
    threshold: u8,
) -> MatchResult<'a>
where
    S: AsRef<str>,
{
    CandidatePool::new(candidates.iter().map(AsRef::as_ref)).best_match(canonical, threshold)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
