//! Roster file loading and lookup.

use std::path::Path;

use meloy_matching::Profile;
use thiserror::Error;

/// Errors from loading or querying a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file {path}")]
    Read {
        /// Path that was attempted.
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The roster file was not a JSON array of profile documents.
    #[error("roster file {path} is not a JSON array of profiles")]
    Parse {
        /// Path that was attempted.
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// A requested profile id is not in the roster.
    #[error("no profile with id {0:?} in the roster")]
    UnknownProfile(String),
}

/// Load a roster from a JSON file holding an array of profile documents.
pub fn load_roster(path: &Path) -> Result<Vec<Profile>, RosterError> {
    let raw = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let profiles: Vec<Profile> =
        serde_json::from_str(&raw).map_err(|source| RosterError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!(path = %path.display(), profiles = profiles.len(), "loaded roster");
    Ok(profiles)
}

/// Find a profile by exact id.
pub fn find_profile<'a>(roster: &'a [Profile], id: &str) -> Result<&'a Profile, RosterError> {
    roster
        .iter()
        .find(|profile| profile.id == id)
        .ok_or_else(|| RosterError::UnknownProfile(id.to_string()))
}
