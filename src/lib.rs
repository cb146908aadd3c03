//! Mentor Algo - deterministic profile ordering engine for the MentorMesh mentorship app
//!
//! This library decides the order in which candidate mentorship profiles
//! are shown to a viewer. Candidates are scored on expertise/interest
//! overlap, scores map to discrete draw weights, and a weighted shuffle
//! seeded from the viewer's email produces the final order - stable for
//! the same user, different between users.
//!
//! Storage, sync and screens live in the surrounding app; this crate is a
//! pure function of its inputs.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    match_score, seed_from_str, weight_for, weighted_shuffle, Lcg32, Ranker,
    ANONYMOUS_SEED_SOURCE,
};
pub use crate::models::{AxisWeights, Profile, ScoredCandidate, WeightTiers};
