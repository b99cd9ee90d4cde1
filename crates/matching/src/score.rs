//! Pairwise compatibility scoring.

use std::collections::HashSet;

use crate::profile::{populated, Profile};
use crate::tokenize::tokenize;

/// Maximum contribution of the skill-overlap signal.
const SKILL_WEIGHT: f64 = 25.0;
/// Maximum contribution of the project-similarity signal.
const PROJECT_WEIGHT: f64 = 30.0;
/// Maximum contribution of the background-similarity signal.
const BACKGROUND_WEIGHT: f64 = 20.0;
/// Maximum contribution of the bio-similarity signal.
const BIO_WEIGHT: f64 = 15.0;
/// Maximum contribution of the collaboration-intent signal.
const COLLAB_WEIGHT: f64 = 10.0;

/// Compute the 0-100 compatibility score between two profiles.
///
/// Five weighted sub-signals feed a running numerator, while the denominator
/// accumulates the maximum of every signal that was structurally applicable:
/// both profiles carry the relevant field, or for collaboration intent, at
/// least one has the flag set. The result is `round(100 * earned / possible)`,
/// or 0 when no signal applies at all.
///
/// Every sub-signal is computed from unordered intersections and unions of
/// the two profiles' fields, so the score is symmetric.
#[must_use]
pub fn calculate_similarity(a: &Profile, b: &Profile) -> u8 {
    let mut earned = 0.0;
    let mut possible = 0.0;

    let skills_a = a.skill_set();
    let skills_b = b.skill_set();
    if !skills_a.is_empty() && !skills_b.is_empty() {
        possible += SKILL_WEIGHT;
        let shared = skills_a.intersection(&skills_b).count();
        let union = skills_a.union(&skills_b).count();
        earned += shared as f64 / union as f64 * SKILL_WEIGHT;
    }

    for (field_a, field_b, weight) in [
        (&a.project, &b.project, PROJECT_WEIGHT),
        (&a.background, &b.background, BACKGROUND_WEIGHT),
        (&a.bio, &b.bio, BIO_WEIGHT),
    ] {
        if let (Some(text_a), Some(text_b)) = (populated(field_a), populated(field_b)) {
            possible += weight;
            earned += text_overlap(text_a, text_b) * weight;
        }
    }

    if a.looking_for_collaborators || b.looking_for_collaborators {
        possible += COLLAB_WEIGHT;
        earned += if a.looking_for_collaborators && b.looking_for_collaborators {
            COLLAB_WEIGHT
        } else {
            COLLAB_WEIGHT / 2.0
        };
    }

    if possible == 0.0 {
        return 0;
    }
    (earned / possible * 100.0).round() as u8
}

/// Count of distinct tokens common to both texts.
pub(crate) fn common_token_count(a: &str, b: &str) -> usize {
    let set_a: HashSet<String> = tokenize(a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(b).into_iter().collect();
    set_a.intersection(&set_b).count()
}

/// Fraction of distinct common tokens relative to the longer token sequence.
///
/// Returns a value in [0.0, 1.0]; either text tokenizing to nothing yields 0.
fn text_overlap(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();
    let common = set_a.intersection(&set_b).count();
    (common as f64 / tokens_a.len().max(tokens_b.len()) as f64).min(1.0)
}
