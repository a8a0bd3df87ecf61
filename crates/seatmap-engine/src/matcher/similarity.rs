// Normalized edit-distance similarity.

use seatmap_core::text::char_len;

/// Similarity of two already-normalized strings, in `[0, 1]`.
///
/// `1 - levenshtein(a, b) / max(len(a), len(b))`, with lengths and edits
/// counted in Unicode scalar values. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = char_len(a).max(char_len(b));
    if longest == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(a, b);
    (longest - distance) as f64 / longest as f64
}

/// Candidate score: the better of the name and alternative-name similarity.
///
/// A missing alternative name scores 0 for that comparison.
pub fn best_similarity(query: &str, name: &str, alt_name: Option<&str>) -> f64 {
    let by_name = similarity(query, name);
    let by_alt = alt_name.map_or(0.0, |alt| similarity(query, alt));
    by_name.max(by_alt)
}
