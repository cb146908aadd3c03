use crate::core::rng::Lcg32;

/// Weighted sampling without replacement over the whole input
///
/// Repeatedly draws one element with probability proportional to its
/// weight among the elements still remaining (inverse-CDF walk over the
/// remaining list), so higher-weighted elements tend to land earlier
/// without being guaranteed to. The output is a permutation of `items`:
/// every element appears exactly once.
///
/// One float is drawn per output position, so for a given seed the output
/// sequence is fully determined. If every remaining weight is zero the
/// draw degenerates to the first remaining element rather than dividing
/// by zero, and still consumes one float.
///
/// O(n²) in the item count. Fine at the expected scale (tens to low
/// hundreds of profiles per screen); a faster sampling scheme would
/// consume the generator differently and reorder every user's feed, so
/// don't swap one in without versioning the ordering.
///
/// # Panics
///
/// Panics when `items` and `weights` differ in length. That is a caller
/// bug, never a runtime condition, and must not be reported as a
/// truncated result.
pub fn weighted_shuffle<T>(items: Vec<T>, weights: &[u32], rng: &mut Lcg32) -> Vec<T> {
    assert_eq!(
        items.len(),
        weights.len(),
        "weighted_shuffle: {} items but {} weights",
        items.len(),
        weights.len()
    );

    let mut pool: Vec<(T, u32)> = items.into_iter().zip(weights.iter().copied()).collect();
    let mut ordered = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let total: f64 = pool.iter().map(|(_, w)| f64::from(*w)).sum();
        let mut r = rng.next_f64() * total;

        // Walk the remaining list until the running total drops to zero.
        // With an all-zero pool r starts at 0.0 and the first element wins.
        let mut chosen = pool.len() - 1;
        for (index, (_, weight)) in pool.iter().enumerate() {
            r -= f64::from(*weight);
            if r <= 0.0 {
                chosen = index;
                break;
            }
        }

        ordered.push(pool.remove(chosen).0);
    }

    ordered
}
