//! Command-line front-end for the Meloy Room matching engine.
//!
//! Loads a roster snapshot from a JSON file (the same document shape the
//! hosted directory serves) and runs the engine operations over it. All
//! computation happens in `meloy-matching`; this crate only parses
//! arguments, loads the roster, and renders results.

pub mod cli;
mod roster;

pub use cli::{Cli, Commands};
pub use roster::{find_profile, load_roster, RosterError};

use anyhow::Result;
use clap::Parser;
use meloy_matching::{
    analyze_role, calculate_similarity, cluster_communities, find_matches, match_reasons, Profile,
};

/// Parse arguments, load the roster, and run the requested command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let roster = load_roster(&cli.roster)?;
    let output = execute(&roster, &cli.command)?;
    println!("{output}");
    Ok(())
}

/// Run one command against an already-loaded roster and render its output.
pub fn execute(roster: &[Profile], command: &Commands) -> Result<String> {
    match command {
        Commands::Score {
            profile_a,
            profile_b,
            json,
        } => {
            let a = find_profile(roster, profile_a)?;
            let b = find_profile(roster, profile_b)?;
            let score = calculate_similarity(a, b);
            let reasons = match_reasons(a, b);
            if *json {
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "score": score,
                    "reasons": reasons,
                }))?)
            } else {
                let mut out = format!("{} <-> {}: {score}/100\n", a.id, b.id);
                for reason in &reasons {
                    out.push_str(&format!("  - {reason}\n"));
                }
                Ok(out.trim_end().to_string())
            }
        }
        Commands::Matches {
            profile,
            limit,
            json,
        } => {
            let subject = find_profile(roster, profile)?;
            let matches = find_matches(subject, roster, *limit);
            if *json {
                return Ok(serde_json::to_string_pretty(&matches)?);
            }
            if matches.is_empty() {
                return Ok(format!("No matches for {} above the score floor.", subject.id));
            }
            let mut out = format!("Top matches for {}:\n", display_name(subject));
            for (rank, m) in matches.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} ({}) — {}/100\n",
                    rank + 1,
                    display_name(&m.profile),
                    m.profile.id,
                    m.score
                ));
                for reason in &m.reasons {
                    out.push_str(&format!("     - {reason}\n"));
                }
            }
            Ok(out.trim_end().to_string())
        }
        Commands::Communities { threshold, json } => {
            let communities = cluster_communities(roster, *threshold);
            if *json {
                return Ok(serde_json::to_string_pretty(&communities)?);
            }
            if communities.is_empty() {
                return Ok("The roster is empty.".to_string());
            }
            let mut out = String::new();
            for community in &communities {
                let members: Vec<&str> =
                    community.members.iter().map(|m| display_name(m)).collect();
                out.push_str(&format!(
                    "Community {} ({} members): {}\n",
                    community.id + 1,
                    community.members.len(),
                    members.join(", ")
                ));
                if !community.common_skills.is_empty() {
                    out.push_str(&format!(
                        "  common skills: {}\n",
                        community.common_skills.join(", ")
                    ));
                }
            }
            Ok(out.trim_end().to_string())
        }
        Commands::Role { profile, json } => {
            let subject = find_profile(roster, profile)?;
            let analysis = analyze_role(subject, roster);
            if *json {
                return Ok(serde_json::to_string_pretty(&analysis)?);
            }
            let mut out = format!("{}: {}\n", display_name(subject), analysis.role);
            out.push_str(&format!(
                "connections: {} total ({} strong, {} medium, {} weak)\n",
                analysis.total_connections,
                analysis.strong_connections,
                analysis.medium_connections,
                analysis.weak_connections
            ));
            if !analysis.unique_skills.is_empty() {
                out.push_str(&format!("unique skills: {}\n", analysis.unique_skills.join(", ")));
            }
            out.push_str(&analysis.summary);
            Ok(out)
        }
    }
}

/// Display name with the id as fallback.
fn display_name(profile: &Profile) -> &str {
    profile.name.as_deref().unwrap_or(&profile.id)
}
