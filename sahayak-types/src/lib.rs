//! Shared DTOs (schemas-as-code) for the sahayak workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod profile;
pub mod report;
pub mod scheme;

/// Schema identifiers.
pub mod schema {
    pub const SAHAYAK_MATCH_V1: &str = "sahayak.match.v1";
    pub const SAHAYAK_PROFILE_V1: &str = "sahayak.profile.v1";
}
