//! Human-readable justifications for a pairwise match.

use std::collections::HashSet;

use crate::profile::{populated, PresenceStatus, Profile};
use crate::score::common_token_count;

/// Fallback when no specific signal fires; keeps the list non-empty.
const GENERIC_REASON: &str = "Potential collaboration opportunity";

/// Most shared skills named in a single reason.
const MAX_SHARED_SKILLS: usize = 3;
/// Most sought-after skills named in a single reason.
const MAX_SOUGHT_SKILLS: usize = 2;

/// Project-token overlap must exceed this to call the projects similar.
const MIN_PROJECT_TOKENS: usize = 1;

/// Derive ordered, human-readable reasons why `a` matches `b`.
///
/// The rules fire in a fixed order and each contributes at most one reason.
/// Skill names are rendered with `a`'s casing. When nothing specific fires,
/// a single generic reason is returned, so the result is never empty.
#[must_use]
pub fn match_reasons(a: &Profile, b: &Profile) -> Vec<String> {
    let mut reasons = Vec::new();
    let skills_b = b.skill_set();

    let shared = matching_names(&a.skills, &skills_b, MAX_SHARED_SKILLS);
    if !shared.is_empty() {
        reasons.push(format!("Shared skills: {}", shared.join(", ")));
    }

    if let (Some(project_a), Some(project_b)) = (populated(&a.project), populated(&b.project)) {
        // Generic wording on purpose: the field value itself stays private.
        if common_token_count(project_a, project_b) > MIN_PROJECT_TOKENS {
            reasons.push("Similar project interests".to_string());
        }
    }

    if a.looking_for_collaborators && b.looking_for_collaborators {
        reasons.push("Both looking for collaborators".to_string());
    }

    if a.status == PresenceStatus::InRoom && b.status == PresenceStatus::InRoom {
        reasons.push("Both currently in the Meloy Room".to_string());
    }

    let sought = matching_names(&a.looking_for, &skills_b, MAX_SOUGHT_SKILLS);
    if !sought.is_empty() {
        reasons.push(format!("Has skills you're looking for: {}", sought.join(", ")));
    }

    if reasons.is_empty() {
        reasons.push(GENERIC_REASON.to_string());
    }
    reasons
}

/// Names whose case-folded form appears in `folded`, first occurrence's
/// casing kept, fold-level duplicates dropped, truncated to `limit`.
fn matching_names(names: &[String], folded: &HashSet<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| {
            let fold = name.to_lowercase();
            folded.contains(&fold) && seen.insert(fold)
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use meloy_matching::{match_reasons, PresenceStatus};
    use meloy_test_utils::ProfileBuilder;

    #[test]
    fn test_shared_skills_keep_subject_casing() {
        let a = ProfileBuilder::new("a").skills(["React", "Design"]).build();
        let b = ProfileBuilder::new("b").skills(["react", "python"]).build();
        assert_eq!(match_reasons(&a, &b), vec!["Shared skills: React"]);
    }

    #[test]
    fn test_shared_skills_truncate_to_three() {
        let a = ProfileBuilder::new("a")
            .skills(["rust", "wasm", "audio", "embedded"])
            .build();
        let b = ProfileBuilder::new("b")
            .skills(["rust", "wasm", "audio", "embedded"])
            .build();
        assert_eq!(match_reasons(&a, &b), vec!["Shared skills: rust, wasm, audio"]);
    }

    #[test]
    fn test_project_overlap_needs_more_than_one_token() {
        let one = ProfileBuilder::new("a").project("robotics lab automation").build();
        let other = ProfileBuilder::new("b").project("robotics outreach events").build();
        // Only "robotics" in common.
        assert_eq!(match_reasons(&one, &other), vec![GENERIC_REASON]);

        let closer = ProfileBuilder::new("c").project("robotics lab events").build();
        assert_eq!(match_reasons(&other, &closer), vec!["Similar project interests"]);
    }

    #[test]
    fn test_presence_and_intent_reasons() {
        let a = ProfileBuilder::new("a")
            .status(PresenceStatus::InRoom)
            .looking_for_collaborators()
            .build();
        let b = ProfileBuilder::new("b")
            .status(PresenceStatus::InRoom)
            .looking_for_collaborators()
            .build();
        assert_eq!(
            match_reasons(&a, &b),
            vec![
                "Both looking for collaborators",
                "Both currently in the Meloy Room",
            ]
        );
    }

    #[test]
    fn test_sought_skills_truncate_to_two() {
        let a = ProfileBuilder::new("a")
            .looking_for(["Python", "Figma", "Copywriting"])
            .build();
        let b = ProfileBuilder::new("b")
            .skills(["python", "figma", "copywriting"])
            .build();
        assert_eq!(
            match_reasons(&a, &b),
            vec!["Has skills you're looking for: Python, Figma"]
        );
    }

    #[test]
    fn test_fallback_is_never_empty() {
        let a = ProfileBuilder::new("a").build();
        let b = ProfileBuilder::new("b").build();
        assert_eq!(match_reasons(&a, &b), vec![GENERIC_REASON]);
    }
}
