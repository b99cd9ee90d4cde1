//! Profile matching and community clustering for the Meloy Room Connector.
//!
//! This crate is the computational core of the room directory. It provides:
//! - Pairwise compatibility scoring across heterogeneous profile fields
//! - Ranked match recommendations with human-readable reasons
//! - Greedy community clustering over the full member roster
//! - Structural role classification for a single member
//!
//! Every operation is a pure, synchronous function over an in-memory
//! snapshot of profiles. Nothing here touches the document store or mutates
//! its inputs; callers re-run the engine whenever their live profile
//! collection changes.

pub mod communities;
pub mod matches;
pub mod profile;
pub mod reasons;
pub mod roles;
pub mod score;
pub mod tokenize;

pub use communities::{cluster_communities, Community, DEFAULT_COMMUNITY_THRESHOLD};
pub use matches::{find_matches, Match, DEFAULT_MATCH_LIMIT};
pub use profile::{PresenceStatus, Profile};
pub use reasons::match_reasons;
pub use roles::{analyze_role, NetworkRole, RoleAnalysis};
pub use score::calculate_similarity;
pub use tokenize::tokenize;
