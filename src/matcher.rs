//! Fuzzy pronunciation matching
//!
//! Compares transcribed speech to the expected answer with a tolerance that
//! scales with word length, forgiving accent and recognition noise.

use strsim::levenshtein;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for comparison: lowercase, decompose accents (NFD) and
/// drop everything outside `[a-z0-9]`.
///
/// Idempotent: normalizing a normalized string is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Edit distance between the normalized forms of two strings
pub fn normalized_distance(a: &str, b: &str) -> usize {
    levenshtein(&normalize(a), &normalize(b))
}

/// Check whether a transcription counts as a correct pronunciation.
///
/// Containment either way is accepted first, so a recognizer that captures
/// filler words around the target ("le chat") still matches. Otherwise the
/// Levenshtein distance must stay within `max(2, 30% of the expected length)`.
pub fn matches(transcribed: &str, expected: &str) -> bool {
    let heard = normalize(transcribed);
    let target = normalize(expected);

    if heard.is_empty() || target.is_empty() {
        return false;
    }

    if heard.contains(&target) || target.contains(&heard) {
        return true;
    }

    let max_distance = 2.max((target.len() as f64 * 0.3).floor() as usize);
    let distance = levenshtein(&heard, &target);

    debug!(
        "Comparing '{}' vs '{}': distance {}, max {}",
        heard, target, distance, max_distance
    );

    distance <= max_distance
}
