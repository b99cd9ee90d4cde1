//! Shared test fixtures for meloy crates.
//!
//! Provides a fluent [`ProfileBuilder`] plus a small, realistic roster used
//! by integration tests across the workspace.

use meloy_matching::{PresenceStatus, Profile};

/// Fluent builder for profile fixtures.
///
/// Every field other than the id starts absent/empty, matching a freshly
/// created directory record.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    /// Start a builder for a profile with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            profile: Profile {
                id: id.into(),
                ..Profile::default()
            },
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = Some(name.into());
        self
    }

    /// Set the project description.
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.profile.project = Some(project.into());
        self
    }

    /// Set the background description.
    #[must_use]
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.profile.background = Some(background.into());
        self
    }

    /// Set the bio.
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.profile.bio = Some(bio.into());
        self
    }

    /// Set the skill list.
    #[must_use]
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the presence status.
    #[must_use]
    pub fn status(mut self, status: PresenceStatus) -> Self {
        self.profile.status = status;
        self
    }

    /// Mark the profile as seeking collaborators.
    #[must_use]
    pub fn looking_for_collaborators(mut self) -> Self {
        self.profile.looking_for_collaborators = true;
        self
    }

    /// Set the desired-skill list.
    #[must_use]
    pub fn looking_for<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.looking_for = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Profile {
        self.profile
    }
}

/// A small roster with two skill clusters and one outlier.
///
/// Layout (relevant for order-sensitive clustering tests):
/// 0. `ada` — rust/wasm systems cluster seed
/// 1. `grace` — rust/wasm, close to ada
/// 2. `mary` — python/data cluster seed
/// 3. `elena` — python/data, close to mary
/// 4. `ken` — woodworking outlier
pub fn sample_roster() -> Vec<Profile> {
    vec![
        ProfileBuilder::new("ada")
            .name("Ada")
            .project("embedded audio processing toolkit")
            .skills(["Rust", "WASM", "DSP"])
            .status(PresenceStatus::InRoom)
            .looking_for_collaborators()
            .build(),
        ProfileBuilder::new("grace")
            .name("Grace")
            .project("embedded audio effects toolkit")
            .skills(["rust", "wasm"])
            .status(PresenceStatus::Online)
            .looking_for_collaborators()
            .build(),
        ProfileBuilder::new("mary")
            .name("Mary")
            .project("climate dataset pipelines")
            .skills(["Python", "Pandas"])
            .build(),
        ProfileBuilder::new("elena")
            .name("Elena")
            .project("climate dataset visualization")
            .skills(["python", "pandas", "d3"])
            .build(),
        ProfileBuilder::new("ken")
            .name("Ken")
            .skills(["Woodworking"])
            .status(PresenceStatus::Away)
            .build(),
    ]
}
