//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meloy_matching::{DEFAULT_COMMUNITY_THRESHOLD, DEFAULT_MATCH_LIMIT};

/// Command-line interface for the `meloy` room directory tools.
#[derive(Debug, Parser)]
#[command(
    name = "meloy",
    about = "Matching and community tools for the Meloy Room directory"
)]
pub struct Cli {
    /// Path to the roster file (a JSON array of profile documents).
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "MELOY_ROSTER",
        default_value = "roster.json"
    )]
    pub roster: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `meloy` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prints the pairwise similarity score and reasons for two profiles.
    Score {
        /// First profile id.
        profile_a: String,
        /// Second profile id.
        profile_b: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Ranks the best matches for one profile.
    Matches {
        /// Subject profile id.
        profile: String,
        /// Maximum number of matches shown.
        #[arg(long, default_value_t = DEFAULT_MATCH_LIMIT)]
        limit: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Clusters the roster into communities.
    Communities {
        /// Minimum similarity to a community's seed (0-100).
        #[arg(long, default_value_t = DEFAULT_COMMUNITY_THRESHOLD)]
        threshold: u8,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Analyzes one profile's role in the network.
    Role {
        /// Subject profile id.
        profile: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}
