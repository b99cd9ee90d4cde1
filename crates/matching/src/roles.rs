//! Structural role classification within the profile network.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::score::calculate_similarity;

/// Minimum score (exclusive) for a pair to count as a connection.
const CONNECTION_FLOOR: u8 = 20;
/// Scores strictly above this are strong; exactly this is medium.
const STRONG_FLOOR: u8 = 60;
/// Scores from here up to [`STRONG_FLOOR`] inclusive are medium.
const MEDIUM_FLOOR: u8 = 40;

/// Strong connections needed (exclusive) for the Core Connector role.
const CORE_CONNECTOR_STRONG: usize = 5;
/// Strong connections needed (exclusive) for the Active Member role.
const ACTIVE_MEMBER_STRONG: usize = 2;
/// Total connections needed (exclusive) for the Bridge Builder role.
const BRIDGE_BUILDER_TOTAL: usize = 5;

/// A skill is unique when fewer than this many other profiles hold it.
const UNIQUE_SKILL_CEILING: usize = 2;
/// Most unique skills named in the summary clause.
const MAX_SUMMARY_SKILLS: usize = 2;

/// A profile's structural position in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkRole {
    /// Many strong ties; a hub for collaboration and knowledge sharing.
    #[serde(rename = "Core Connector")]
    CoreConnector,
    /// Several strong ties and regular collaboration.
    #[serde(rename = "Active Member")]
    ActiveMember,
    /// Many connections spread thin across groups.
    #[serde(rename = "Bridge Builder")]
    BridgeBuilder,
    /// Few connections so far.
    Newcomer,
}

impl fmt::Display for NetworkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CoreConnector => "Core Connector",
            Self::ActiveMember => "Active Member",
            Self::BridgeBuilder => "Bridge Builder",
            Self::Newcomer => "Newcomer",
        };
        f.write_str(name)
    }
}

/// Connection counts, role, and distinguishing skills for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAnalysis {
    /// Classified role.
    pub role: NetworkRole,
    /// Connections of any strength (score above 20).
    pub total_connections: usize,
    /// Connections scoring above 60.
    pub strong_connections: usize,
    /// Connections scoring 40 through 60.
    pub medium_connections: usize,
    /// Connections scoring below 40.
    pub weak_connections: usize,
    /// Subject skills that fewer than two other profiles hold.
    pub unique_skills: Vec<String>,
    /// Narrative description of the role.
    pub summary: String,
}

/// Classify `subject`'s position in the network from its pairwise scores.
///
/// Other profiles scoring above 20 count as connections, partitioned into
/// strong/medium/weak bands. The role falls out of a first-match rule chain
/// over those counts. The subject is excluded by id even when it appears in
/// `population`.
#[must_use]
pub fn analyze_role(subject: &Profile, population: &[Profile]) -> RoleAnalysis {
    let scores: Vec<u8> = population
        .iter()
        .filter(|other| other.id != subject.id)
        .map(|other| calculate_similarity(subject, other))
        .filter(|&score| score > CONNECTION_FLOOR)
        .collect();

    let strong_connections = scores.iter().filter(|&&s| s > STRONG_FLOOR).count();
    let medium_connections = scores
        .iter()
        .filter(|&&s| (MEDIUM_FLOOR..=STRONG_FLOOR).contains(&s))
        .count();
    let weak_connections = scores.iter().filter(|&&s| s < MEDIUM_FLOOR).count();
    let total_connections = scores.len();

    let role = if strong_connections > CORE_CONNECTOR_STRONG {
        NetworkRole::CoreConnector
    } else if strong_connections > ACTIVE_MEMBER_STRONG {
        NetworkRole::ActiveMember
    } else if total_connections > BRIDGE_BUILDER_TOTAL {
        NetworkRole::BridgeBuilder
    } else {
        NetworkRole::Newcomer
    };

    let unique_skills = unique_skills(subject, population);
    let summary = role_summary(role, subject, &unique_skills);

    RoleAnalysis {
        role,
        total_connections,
        strong_connections,
        medium_connections,
        weak_connections,
        unique_skills,
        summary,
    }
}

/// Subject skills held by fewer than two other profiles, case-insensitive,
/// subject's casing and ordering kept.
fn unique_skills(subject: &Profile, population: &[Profile]) -> Vec<String> {
    let mut seen = HashSet::new();
    subject
        .skills
        .iter()
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .filter(|skill| {
            let fold = skill.to_lowercase();
            let holders = population
                .iter()
                .filter(|other| other.id != subject.id)
                .filter(|other| other.skills.iter().any(|s| s.to_lowercase() == fold))
                .count();
            holders < UNIQUE_SKILL_CEILING
        })
        .cloned()
        .collect()
}

/// Substitute the display name into the per-role template, appending a
/// unique-skills clause when there is one to make.
fn role_summary(role: NetworkRole, subject: &Profile, unique_skills: &[String]) -> String {
    let name = subject.name.as_deref().unwrap_or("This user");

    let mut summary = match role {
        NetworkRole::CoreConnector => format!(
            "{name} is a highly connected member with strong ties to many people in the \
             network. They're likely a key figure for collaboration and knowledge sharing."
        ),
        NetworkRole::ActiveMember => {
            format!("{name} has solid connections in the network and actively collaborates with others.")
        }
        NetworkRole::BridgeBuilder => format!(
            "{name} connects with many people across different groups, making them valuable \
             for introducing people."
        ),
        NetworkRole::Newcomer => format!(
            "{name} is relatively new or has niche interests. Great opportunity to help them connect!"
        ),
    };

    if !unique_skills.is_empty() {
        let named: Vec<&str> = unique_skills
            .iter()
            .take(MAX_SUMMARY_SKILLS)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!(" They have unique expertise in {}.", named.join(" and ")));
    }

    summary
}

#[cfg(test)]
mod tests {
    use meloy_matching::{analyze_role, NetworkRole, Profile};
    use meloy_test_utils::ProfileBuilder;

    fn twin(id: &str) -> Profile {
        ProfileBuilder::new(id).skills(["rust", "audio", "wasm"]).build()
    }

    #[test]
    fn test_core_connector_needs_six_strong() {
        let subject = twin("subject");
        // Identical skill sets score 100: strong connections.
        let population: Vec<Profile> = (0..6).map(|i| twin(&format!("p{i}"))).collect();
        let analysis = analyze_role(&subject, &population);
        assert_eq!(analysis.strong_connections, 6);
        assert_eq!(analysis.role, NetworkRole::CoreConnector);

        let smaller = analyze_role(&subject, &population[..5]);
        assert_eq!(smaller.role, NetworkRole::ActiveMember);
    }

    #[test]
    fn test_newcomer_with_no_connections() {
        let subject = ProfileBuilder::new("subject").skills(["pottery"]).build();
        let population = vec![twin("a"), twin("b")];
        let analysis = analyze_role(&subject, &population);
        assert_eq!(analysis.total_connections, 0);
        assert_eq!(analysis.role, NetworkRole::Newcomer);
        assert!(analysis.summary.starts_with("This user is relatively new"));
    }

    #[test]
    fn test_band_boundaries() {
        // One skill of three shared against a twin population yields exact
        // band-edge scores via the skill signal alone.
        let subject = ProfileBuilder::new("subject").skills(["rust"]).build();
        // shared 1 / union 3 -> 33: weak band.
        let weak = ProfileBuilder::new("weak").skills(["rust", "audio", "wasm"]).build();
        // shared 1 / union 2 -> 50: medium band.
        let medium = ProfileBuilder::new("medium").skills(["rust", "audio"]).build();
        // shared 1 / union 1 -> 100: strong band.
        let strong = ProfileBuilder::new("strong").skills(["Rust"]).build();

        let analysis = analyze_role(&subject, &[weak, medium, strong]);
        assert_eq!(analysis.total_connections, 3);
        assert_eq!(analysis.weak_connections, 1);
        assert_eq!(analysis.medium_connections, 1);
        assert_eq!(analysis.strong_connections, 1);
    }

    #[test]
    fn test_unique_skills_case_insensitive() {
        let subject = ProfileBuilder::new("subject")
            .name("Dana")
            .skills(["Weaving", "rust"])
            .build();
        let population = vec![
            ProfileBuilder::new("a").skills(["Rust"]).build(),
            ProfileBuilder::new("b").skills(["rust"]).build(),
            ProfileBuilder::new("c").skills(["weaving"]).build(),
        ];
        let analysis = analyze_role(&subject, &population);
        // Two others hold rust, only one holds weaving.
        assert_eq!(analysis.unique_skills, vec!["Weaving"]);
        assert!(analysis.summary.ends_with("They have unique expertise in Weaving."));
        assert!(analysis.summary.starts_with("Dana "));
    }

    #[test]
    fn test_score_of_sixty_counts_as_medium() {
        // shared 3 / union 5 of the skill signal -> exactly 60.
        let subject = twin("subject");
        let edge = ProfileBuilder::new("edge")
            .skills(["rust", "audio", "wasm", "python", "pandas"])
            .build();
        let analysis = analyze_role(&subject, &[edge]);
        assert_eq!(analysis.medium_connections, 1);
        assert_eq!(analysis.strong_connections, 0);
    }
}
