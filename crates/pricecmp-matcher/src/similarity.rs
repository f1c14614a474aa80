//! Token-sort similarity between product types.
//!
//! Both strings are cleaned, their whitespace-separated tokens sorted and
//! re-joined, and the results compared with an indel ratio:
//! `2 * LCS / (len(a) + len(b))`, scaled to `0..=100` and rounded half to
//! even. Word order therefore does not matter (`"turkey ground"` scores 100
//! against `"ground turkey"`).

/// Similarity of `a` and `b` in `0..=100`, insensitive to word order and case.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Cleans `s` and sorts its tokens, producing the form [`ratio`] compares.
///
/// Cleaning drops Latin-1 supplement characters (U+0080..=U+00FF), turns any
/// other character that is not alphanumeric or `_` into a space, and
/// lowercases.
#[must_use]
pub fn sort_tokens(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !('\u{80}'..='\u{ff}').contains(c))
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Indel similarity of two already-prepared strings, in `0..=100`.
///
/// Equal strings score 100 (including two empty strings); an empty string
/// against a non-empty one scores 0.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let common = lcs_len(&a, &b);

    #[allow(clippy::cast_precision_loss)]
    let score = 100.0 * (2 * common) as f64 / (a.len() + b.len()) as f64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = score.round_ties_even() as u8;
    rounded
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
