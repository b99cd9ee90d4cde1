//! Greedy community clustering over pairwise similarity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::score::calculate_similarity;
use crate::tokenize::tokenize;

/// Default minimum similarity to a seed for joining its community.
pub const DEFAULT_COMMUNITY_THRESHOLD: u8 = 40;

/// A group of profiles linked to a common seed by similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Sequential id in generation order.
    pub id: usize,
    /// Members in discovery order; the seed comes first. Never empty.
    pub members: Vec<Profile>,
    /// Skills held by every member, case-insensitive, in the seed's casing.
    pub common_skills: Vec<String>,
    /// Tokens of the seed's project and background. Advisory only; later
    /// members are not guaranteed to share them.
    pub common_interests: Vec<String>,
}

/// Partition `population` into communities by greedy single-linkage.
///
/// Walks the population in order. Each profile not yet assigned seeds a new
/// community and pulls in every later unassigned profile whose similarity to
/// the seed (not to the evolving group) meets the threshold. Assignment is
/// final: a profile is never moved or reconsidered, so the partition depends
/// on population order. This seed-linkage policy is deliberate; do not swap
/// in a full-linkage or optimal clustering.
///
/// Communities are returned largest first; equal sizes keep generation order.
#[must_use]
pub fn cluster_communities(population: &[Profile], threshold: u8) -> Vec<Community> {
    let mut communities: Vec<Community> = Vec::new();
    let mut assigned: HashSet<&str> = HashSet::new();

    for seed in population {
        if !assigned.insert(seed.id.as_str()) {
            continue;
        }

        let mut community = Community {
            id: communities.len(),
            members: vec![seed.clone()],
            common_skills: distinct_skills(&seed.skills),
            common_interests: seed_interests(seed),
        };

        for candidate in population {
            if assigned.contains(candidate.id.as_str()) {
                continue;
            }
            if calculate_similarity(seed, candidate) >= threshold {
                let candidate_skills = candidate.skill_set();
                community
                    .common_skills
                    .retain(|skill| candidate_skills.contains(&skill.to_lowercase()));
                community.members.push(candidate.clone());
                assigned.insert(candidate.id.as_str());
            }
        }

        communities.push(community);
    }

    communities.sort_by(|x, y| y.members.len().cmp(&x.members.len()));
    tracing::debug!(
        profiles = population.len(),
        communities = communities.len(),
        "clustered population"
    );
    communities
}

/// Seed skills with case-insensitive duplicates dropped, first casing kept.
fn distinct_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Deduplicated tokens of the seed's project and background text.
fn seed_interests(seed: &Profile) -> Vec<String> {
    let text = format!(
        "{} {}",
        seed.project.as_deref().unwrap_or_default(),
        seed.background.as_deref().unwrap_or_default()
    );
    let mut seen = HashSet::new();
    tokenize(&text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
