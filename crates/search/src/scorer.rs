//! Token-level scoring of one field value against a query.

use crate::relevance::word_similarity;

/// Score for a query token found anywhere inside the field value.
pub const CONTAINS_SCORE: f64 = 10.0;

/// Lower bound of the length penalty.
const MIN_LENGTH_PENALTY: f64 = 0.1;

/// Field length at which the penalty bottoms out.
const PENALTY_SPAN: f64 = 1000.0;

/// Lowercase and trim a string. No accent folding.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Multiplier that keeps long fields from dominating on size alone.
///
/// `max(0.1, 1 - chars / 1000)`.
pub fn length_penalty(normalized_value: &str) -> f64 {
    let len = normalized_value.chars().count() as f64;
    (1.0 - len / PENALTY_SPAN).max(MIN_LENGTH_PENALTY)
}

/// Score a free-text query against one field value.
///
/// Each whitespace-separated query token scores [`CONTAINS_SCORE`] if the
/// whole field contains it, otherwise its best [`word_similarity`] over
/// the field's words. Token scores are summed and multiplied by
/// [`length_penalty`].
///
/// Returns 0.0 when either side is blank.
///
/// # Example
/// ```
/// use catalog_search::score_field;
///
/// assert!(score_field("mouse", "Wireless Mouse") > score_field("moose", "Wireless Mouse"));
/// assert_eq!(score_field("   ", "Wireless Mouse"), 0.0);
/// ```
pub fn score_field(query: &str, field_value: &str) -> f64 {
    score_normalized(&normalize(query), &normalize(field_value))
}

/// [`score_field`] for inputs that are already normalized.
pub(crate) fn score_normalized(query: &str, field_value: &str) -> f64 {
    if query.is_empty() || field_value.is_empty() {
        return 0.0;
    }

    let raw: f64 = query
        .split_whitespace()
        .map(|token| token_score(token, field_value))
        .sum();

    raw * length_penalty(field_value)
}

fn token_score(token: &str, field_value: &str) -> f64 {
    if field_value.contains(token) {
        return CONTAINS_SCORE;
    }

    field_value
        .split_whitespace()
        .map(|word| word_similarity(token, word))
        .fold(0.0, f64::max)
}
