//! Edit-distance primitives.

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions all cost 1. Distance is
/// counted in `char`s, not bytes.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Full (m+1) x (n+1) table, row-major
    let width = n + 1;
    let mut matrix = vec![0usize; (m + 1) * width];

    for i in 0..=m {
        matrix[i * width] = i;
    }
    for j in 0..=n {
        matrix[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i * width + j] = (matrix[(i - 1) * width + j] + 1)
                .min(matrix[i * width + j - 1] + 1)
                .min(matrix[(i - 1) * width + j - 1] + cost);
        }
    }

    matrix[m * width + n]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings have similarity 0.0, not 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
