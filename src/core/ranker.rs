use crate::config::ScoringSettings;
use crate::core::rng::Lcg32;
use crate::core::scoring::{match_score, weight_for};
use crate::core::seed::{seed_from_str, ANONYMOUS_SEED_SOURCE};
use crate::core::shuffle::weighted_shuffle;
use crate::models::{AxisWeights, Profile, ScoredCandidate, WeightTiers};
use tracing::debug;

/// Ordering facade - turns an unordered candidate list into the display order
///
/// # Pipeline
/// 1. Score every candidate against the viewer (expertise/interest overlap)
/// 2. Map scores to discrete draw weights
/// 3. Derive a seed from the viewer's email
/// 4. Weighted shuffle with a generator built from that seed
///
/// Pure and stateless: the generator is created fresh per call, inputs are
/// never mutated, and the same candidates plus the same viewer email
/// reproduce the same order every time. Safe to call concurrently from
/// several screens.
#[derive(Debug, Clone)]
pub struct Ranker {
    axes: AxisWeights,
    tiers: WeightTiers,
}

impl Ranker {
    pub fn new(axes: AxisWeights, tiers: WeightTiers) -> Self {
        Self { axes, tiers }
    }

    pub fn with_default_weights() -> Self {
        Self {
            axes: AxisWeights::default(),
            tiers: WeightTiers::default(),
        }
    }

    pub fn from_settings(scoring: &ScoringSettings) -> Self {
        Self {
            axes: AxisWeights::from(scoring),
            tiers: WeightTiers::from(scoring),
        }
    }

    /// Score each candidate against the viewer and attach its draw weight
    ///
    /// Exposed separately so the app can render match badges; the ordering
    /// entry points below go through this same pass.
    pub fn score_candidates<'a>(
        &self,
        viewer: &Profile,
        candidates: &'a [Profile],
    ) -> Vec<ScoredCandidate<'a>> {
        candidates
            .iter()
            .map(|profile| {
                let score = match_score(viewer, profile, &self.axes);
                ScoredCandidate {
                    profile,
                    match_score: score,
                    weight: weight_for(score, &self.tiers),
                }
            })
            .collect()
    }

    /// Order candidates for display to the given viewer
    ///
    /// The seed is derived from the viewer's email, or from a fixed
    /// fallback when browsing anonymously, so callers never manage seeds
    /// directly. Without a viewer there is nothing to score against and
    /// every candidate draws with the base weight, which reduces to a
    /// seeded uniform shuffle; both paths run the same algorithm.
    pub fn order_for_viewer(
        &self,
        candidates: Vec<Profile>,
        viewer: Option<&Profile>,
    ) -> Vec<Profile> {
        if candidates.is_empty() {
            return candidates;
        }

        let seed_source = viewer.map_or(ANONYMOUS_SEED_SOURCE, |v| v.email.as_str());
        self.order_with_seed(candidates, viewer, seed_from_str(seed_source))
    }

    /// Order candidates with an explicit seed
    ///
    /// Returns the same profiles, every one exactly once, in display order.
    pub fn order_with_seed(
        &self,
        candidates: Vec<Profile>,
        viewer: Option<&Profile>,
        seed: u32,
    ) -> Vec<Profile> {
        if candidates.is_empty() {
            return candidates;
        }

        let weights: Vec<u32> = match viewer {
            Some(viewer) => self
                .score_candidates(viewer, &candidates)
                .iter()
                .map(|scored| scored.weight)
                .collect(),
            None => vec![self.tiers.base_weight; candidates.len()],
        };

        debug!(
            candidates = candidates.len(),
            seed,
            scored = viewer.is_some(),
            "ordering candidate profiles"
        );

        let mut rng = Lcg32::new(seed);
        weighted_shuffle(candidates, &weights, &mut rng)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
