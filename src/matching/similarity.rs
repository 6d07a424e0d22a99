//! Text normalization and symptom-to-symptom similarity.
//!
//! Comparison is deliberately shallow: lowercase and trim, then exact,
//! containment, and word-overlap checks. There is no punctuation stripping,
//! stemming, or synonym handling, so "tired" does not match "fatigue".
//!
//! The score is symmetric in its two arguments, but it is not transitive: a
//! user symptom that scores well against two catalog symptoms says nothing
//! about how those two compare with each other.

use std::collections::HashSet;

/// Score for identical normalized text
pub const IDENTICAL_SCORE: f64 = 1.0;

/// Score when one normalized string contains the other
pub const CONTAINS_SCORE: f64 = 0.8;

/// Ceiling of the word-overlap score
pub const WORD_OVERLAP_CEILING: f64 = 0.5;

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Lowercase and trim a symptom string for comparison
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Similarity in `[0, 1]` between a user-reported symptom and a catalog symptom.
///
/// Rules, first applicable wins:
///
/// 1. identical after normalization: `1.0`
/// 2. one contains the other: `0.8`
/// 3. shared whitespace-separated words: `0.5 * shared / max(words_a, words_b)`
/// 4. otherwise `0.0`
///
/// An empty string never matches a non-empty one. Two empty strings are
/// identical.
///
/// # Examples
///
/// ```
/// use symptom_cluster::matching::similarity::similarity;
///
/// assert_eq!(similarity("Fatigue", "fatigue"), 1.0);
/// assert_eq!(similarity("central obesity", "Central obesity (large waist circumference)"), 0.8);
/// assert_eq!(similarity("muscle aches", "Muscle pain"), 0.25);
/// assert_eq!(similarity("tired", "Fatigue"), 0.0);
/// ```
#[must_use]
pub fn similarity(user_symptom: &str, cluster_symptom: &str) -> f64 {
    let user = normalize(user_symptom);
    let cluster = normalize(cluster_symptom);

    if user == cluster {
        return IDENTICAL_SCORE;
    }

    // Only one side can be empty here; "" is a substring of everything
    if user.is_empty() || cluster.is_empty() {
        return 0.0;
    }

    if cluster.contains(&user) || user.contains(&cluster) {
        return CONTAINS_SCORE;
    }

    word_overlap(&user, &cluster)
}

/// Word-overlap score of two already-normalized strings
fn word_overlap(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let shared = words_a.intersection(&words_b).count();
    if shared == 0 {
        return 0.0;
    }

    let largest = words_a.len().max(words_b.len());
    WORD_OVERLAP_CEILING * (count_to_f64(shared) / count_to_f64(largest))
}
