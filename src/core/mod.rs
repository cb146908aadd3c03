// Core algorithm exports
pub mod ranker;
pub mod rng;
pub mod scoring;
pub mod seed;
pub mod shuffle;

pub use ranker::Ranker;
pub use rng::Lcg32;
pub use scoring::{match_score, weight_for};
pub use seed::{seed_from_str, ANONYMOUS_SEED_SOURCE};
pub use shuffle::weighted_shuffle;
