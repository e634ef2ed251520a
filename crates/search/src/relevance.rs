//! Word-level relevance tiers.
//!
//! A query token is compared against a single field word by walking the
//! tiers below in priority order; the first tier that applies decides the
//! score.

use crate::fuzzy::similarity;
use crate::typo::{is_adjacent_swap, is_missing_characters, ADJACENT_SWAP_SCORE, MISSING_CHARACTERS_SCORE};

/// Edit-distance bands as `(minimum similarity, multiplier)`, strongest first.
const SIMILARITY_BANDS: [(f64, f64); 3] = [(0.8, 6.0), (0.7, 5.0), (0.6, 4.0)];

/// How a query token matched a field word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTier {
    /// Word equals the token
    Exact,
    /// Word starts with the token
    Prefix,
    /// Word contains the token
    Substring,
    /// Edit-distance similarity at or above 0.6
    Similar {
        /// `1 - distance / max_len`
        similarity: f64,
        /// Band multiplier (6.0, 5.0 or 4.0)
        multiplier: f64,
    },
    /// One side is the other with up to two characters dropped
    MissingCharacters,
    /// Two adjacent characters transposed
    AdjacentSwap,
    /// No match
    None,
}

impl MatchTier {
    /// Score contributed by this tier.
    pub fn score(self) -> f64 {
        match self {
            MatchTier::Exact => 10.0,
            MatchTier::Prefix => 8.0,
            MatchTier::Substring => 6.0,
            MatchTier::Similar { similarity, multiplier } => similarity * multiplier,
            MatchTier::MissingCharacters => MISSING_CHARACTERS_SCORE,
            MatchTier::AdjacentSwap => ADJACENT_SWAP_SCORE,
            MatchTier::None => 0.0,
        }
    }

    /// Whether this tier was reached without edit distance or typo checks.
    pub fn is_literal(self) -> bool {
        matches!(self, MatchTier::Exact | MatchTier::Prefix | MatchTier::Substring)
    }
}

/// Classify how `token` matches `word`. Comparison is case-insensitive.
pub fn classify_word(token: &str, word: &str) -> MatchTier {
    let token = token.trim().to_lowercase();
    let word = word.trim().to_lowercase();

    if token.is_empty() || word.is_empty() {
        return MatchTier::None;
    }

    if token == word {
        return MatchTier::Exact;
    }

    if word.starts_with(&token) {
        return MatchTier::Prefix;
    }

    if word.contains(&token) {
        return MatchTier::Substring;
    }

    let similarity = similarity(&token, &word);
    for (threshold, multiplier) in SIMILARITY_BANDS {
        if similarity >= threshold {
            return MatchTier::Similar { similarity, multiplier };
        }
    }

    if is_missing_characters(&token, &word) || is_missing_characters(&word, &token) {
        return MatchTier::MissingCharacters;
    }

    if is_adjacent_swap(&token, &word) {
        return MatchTier::AdjacentSwap;
    }

    MatchTier::None
}

/// Score `token` against a single `word`.
pub fn word_similarity(token: &str, word: &str) -> f64 {
    classify_word(token, word).score()
}
