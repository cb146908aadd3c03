/// Multiplier of the 32-bit linear congruential recurrence
const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the 32-bit linear congruential recurrence
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a float, the modulus of the recurrence
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Seeded 32-bit linear congruential generator
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`; each draw advances
/// the state exactly once and returns `state / 2^32` in `[0, 1)`.
///
/// Not cryptographically secure. Its only job is reproducible shuffling:
/// the same seed must yield the same float stream on every platform and
/// release. Construct one fresh per ordering call; the state is never
/// shared.
#[derive(Debug, Clone)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state once and return the next float in `[0, 1)`
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / LCG_MODULUS
    }
}
