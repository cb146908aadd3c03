// Model exports
pub mod domain;

pub use domain::{AxisWeights, Profile, ScoredCandidate, WeightTiers};
