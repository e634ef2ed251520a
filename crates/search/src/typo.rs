//! Typo pattern detection for near-miss words.
//!
//! These checks only run once edit-distance similarity has already
//! fallen below the fuzzy threshold.

/// Score awarded when one word is the other with up to two characters dropped.
pub const MISSING_CHARACTERS_SCORE: f64 = 3.0;

/// Score awarded for a single adjacent transposition.
pub const ADJACENT_SWAP_SCORE: f64 = 3.5;

/// Maximum number of characters `longer` may carry on top of `shorter`.
const MAX_MISSING: usize = 2;

/// Check whether `shorter` is `longer` with at most two characters removed.
///
/// Walks both strings greedily; a mismatch advances only the cursor into
/// `longer`. Fails if `shorter` is not strictly shorter or the length gap
/// exceeds two.
pub fn is_missing_characters(shorter: &str, longer: &str) -> bool {
    let shorter: Vec<char> = shorter.chars().collect();
    let longer: Vec<char> = longer.chars().collect();

    if shorter.len().abs_diff(longer.len()) > MAX_MISSING {
        return false;
    }
    if shorter.len() >= longer.len() {
        return false;
    }

    let mut s = 0;
    let mut l = 0;
    let mut skipped = 0;

    while s < shorter.len() && l < longer.len() {
        if shorter[s] == longer[l] {
            s += 1;
        } else {
            skipped += 1;
            if skipped > MAX_MISSING {
                return false;
            }
        }
        l += 1;
    }

    s == shorter.len()
}

/// Check whether two equal-length words differ by one adjacent transposition.
pub fn is_adjacent_swap(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() != b.len() {
        return false;
    }

    let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();

    match diffs.as_slice() {
        &[i, j] if j - i == 1 => a[i] == b[j] && a[j] == b[i],
        _ => false,
    }
}

/// Score a token/word pair on common typo patterns.
///
/// Order matters: missing characters (token in word, then word in token)
/// are checked before adjacent swaps.
pub fn typo_score(token: &str, word: &str) -> f64 {
    let token = token.to_lowercase();
    let word = word.to_lowercase();

    if is_missing_characters(&token, &word) || is_missing_characters(&word, &token) {
        return MISSING_CHARACTERS_SCORE;
    }

    if is_adjacent_swap(&token, &word) {
        return ADJACENT_SWAP_SCORE;
    }

    0.0
}
