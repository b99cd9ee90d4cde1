//! Profile data model shared by every engine operation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Presence state of a member in the room directory.
///
/// The document store serves these as display strings ("In Room", "Online",
/// "Away"), so the serde names follow the wire format. `InRoom` is the
/// highest-priority state; a profile with no stored status is `Away`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    /// Physically present in the Meloy Room.
    #[serde(rename = "In Room")]
    InRoom,
    /// Reachable remotely.
    Online,
    /// Not currently reachable.
    #[default]
    Away,
}

/// A member's directory record as served by the hosted document store.
///
/// Profiles are read-only snapshots: no engine operation mutates one or
/// holds onto it across calls. Optional text fields distinguish "absent"
/// from "present"; an empty string still counts as absent for every
/// similarity signal (see [`populated`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Opaque stable identifier, used for self-exclusion and set membership.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Free-text description of current work.
    pub project: Option<String>,
    /// Free-text description of expertise.
    pub background: Option<String>,
    /// Free-text self-description.
    pub bio: Option<String>,
    /// Declared skills. Identity is case-insensitive; original casing is
    /// preserved for display.
    pub skills: Vec<String>,
    /// Presence state.
    pub status: PresenceStatus,
    /// Whether this member is actively seeking collaborators.
    pub looking_for_collaborators: bool,
    /// Skills this member wants to find in others.
    pub looking_for: Vec<String>,
}

impl Profile {
    /// Case-folded view of this profile's skills.
    pub(crate) fn skill_set(&self) -> HashSet<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

/// A text field participates in scoring only when present and non-empty.
pub(crate) fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
