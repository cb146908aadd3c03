use crate::models::{AxisWeights, Profile, WeightTiers};

/// Calculate the match score between a viewer and one candidate
///
/// Scoring formula (two independent axes, fixed points each):
/// - expertise axis: `candidate.expertise` overlaps `viewer.interest`
///   ("they can teach what I want to learn")
/// - interest axis: `candidate.interest` overlaps `viewer.expertise`
///   ("they want to learn what I can teach")
///
/// Overlap is case-insensitive substring containment checked in both
/// directions. There is no tokenization, stemming or partial credit;
/// scores produced here must stay comparable across app releases, so the
/// check is deliberately this crude.
pub fn match_score(viewer: &Profile, candidate: &Profile, axes: &AxisWeights) -> u32 {
    let viewer_interest = viewer.interest.to_lowercase();
    let viewer_expertise = viewer.expertise.to_lowercase();
    let candidate_expertise = candidate.expertise.to_lowercase();
    let candidate_interest = candidate.interest.to_lowercase();

    let mut score = 0;

    if contains_either_way(&candidate_expertise, &viewer_interest) {
        score += axes.expertise;
    }
    if contains_either_way(&candidate_interest, &viewer_expertise) {
        score += axes.interest;
    }

    score
}

/// Bidirectional substring containment
///
/// A pair with exactly one empty operand never matches; two empty operands
/// match (an unfilled field only "overlaps" another unfilled field).
#[inline]
fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    a.contains(b) || b.contains(a)
}

/// Map a match score to its draw weight
///
/// Thresholds are inclusive at the lower bound of each tier.
#[inline]
pub fn weight_for(score: u32, tiers: &WeightTiers) -> u32 {
    if score >= tiers.high_threshold {
        tiers.high_weight
    } else if score >= tiers.mid_threshold {
        tiers.mid_weight
    } else {
        tiers.base_weight
    }
}
