//! Normalized edit similarity (0 ~ 100)
//!
//! Uses the Indel distance (insertions and deletions only):
//! `ratio = 100 * (1 - indel / (len_a + len_b))`, where
//! `indel = len_a + len_b - 2 * lcs`.

/// Longest common subsequence length over Unicode scalar values
pub fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // single-row DP
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}

/// Indel distance between two strings
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.len() + b.len() - 2 * lcs_len(&a, &b)
}

/// Symmetric similarity score in `0.0 ..= 100.0`, case-insensitive
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    ratio_chars(&a, &b)
}

/// [`ratio`] on pre-lowered char slices
pub fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let dist = total - 2 * lcs_len(a, b);
    100.0 * (1.0 - dist as f64 / total as f64)
}

/// Highest score two strings of these lengths can reach
///
/// The LCS is at most the shorter length, so candidates whose bound is
/// below the current best can be skipped without scoring.
pub fn ratio_upper_bound(len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 100.0;
    }
    let dist = total - 2 * len_a.min(len_b);
    100.0 * (1.0 - dist as f64 / total as f64)
}
