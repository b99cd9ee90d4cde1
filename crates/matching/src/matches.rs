//! Ranked match recommendations for a single profile.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::reasons::match_reasons;
use crate::score::calculate_similarity;

/// Default number of recommendations returned by [`find_matches`].
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Scores at or below this floor are never surfaced as matches.
const MIN_MATCH_SCORE: u8 = 10;

/// A recommended profile together with its score and supporting reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// The recommended profile.
    pub profile: Profile,
    /// Compatibility score (0-100).
    pub score: u8,
    /// Human-readable justifications; never empty.
    pub reasons: Vec<String>,
}

/// Rank every other profile against `subject` and return the top `limit`.
///
/// The subject is excluded by id even when it appears in `population`.
/// Profiles scoring 10 or below are dropped. The sort is stable, so ties
/// keep their population order. A `limit` of zero yields no matches.
#[must_use]
pub fn find_matches(subject: &Profile, population: &[Profile], limit: usize) -> Vec<Match> {
    if limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<Match> = population
        .iter()
        .filter(|candidate| candidate.id != subject.id)
        .map(|candidate| Match {
            score: calculate_similarity(subject, candidate),
            reasons: match_reasons(subject, candidate),
            profile: candidate.clone(),
        })
        .filter(|m| m.score > MIN_MATCH_SCORE)
        .collect();

    matches.sort_by(|x, y| y.score.cmp(&x.score));
    matches.truncate(limit);
    tracing::debug!(subject = %subject.id, count = matches.len(), "ranked matches");
    matches
}

#[cfg(test)]
mod tests {
    use meloy_matching::{find_matches, Profile, DEFAULT_MATCH_LIMIT};
    use meloy_test_utils::ProfileBuilder;

    fn subject() -> Profile {
        ProfileBuilder::new("subject")
            .skills(["rust", "audio"])
            .looking_for_collaborators()
            .build()
    }

    #[test]
    fn test_excludes_subject_by_id() {
        let population = vec![
            subject(),
            ProfileBuilder::new("other").skills(["rust", "audio"]).build(),
        ];
        let matches = find_matches(&subject(), &population, DEFAULT_MATCH_LIMIT);
        assert!(matches.iter().all(|m| m.profile.id != "subject"));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_drops_low_scores() {
        let loner = ProfileBuilder::new("loner").skills(["rust", "audio"]).build();
        // Disjoint skills and no other applicable signal: scores 0.
        let population = vec![ProfileBuilder::new("far").skills(["knitting"]).build()];
        let matches = find_matches(&loner, &population, DEFAULT_MATCH_LIMIT);
        assert!(matches.is_empty(), "expected no matches, got {matches:?}");
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let population = vec![
            ProfileBuilder::new("partial").skills(["rust", "python"]).build(),
            ProfileBuilder::new("twin-a").skills(["rust", "audio"]).build(),
            ProfileBuilder::new("twin-b").skills(["rust", "audio"]).build(),
        ];
        let matches = find_matches(&subject(), &population, DEFAULT_MATCH_LIMIT);
        let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
        // Twins tie on score and keep their population order.
        assert_eq!(ids, vec!["twin-a", "twin-b", "partial"]);
    }

    #[test]
    fn test_limit_truncates_and_zero_is_empty() {
        let population: Vec<Profile> = (0..8)
            .map(|i| {
                ProfileBuilder::new(format!("p{i}"))
                    .skills(["rust", "audio"])
                    .build()
            })
            .collect();
        assert_eq!(find_matches(&subject(), &population, 3).len(), 3);
        assert!(find_matches(&subject(), &population, 0).is_empty());
    }

    #[test]
    fn test_empty_population() {
        assert!(find_matches(&subject(), &[], DEFAULT_MATCH_LIMIT).is_empty());
    }
}
