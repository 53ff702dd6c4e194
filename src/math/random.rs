//! Uniform integer generation over `[0, n)` without modulo bias

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::io::error::{Result, invalid_argument};

/// Size of the random domain drawn from per attempt (63 bits)
const DOMAIN: u64 = 1 << 63;

/// Seeded source of unbiased bounded integers
///
/// Each attempt draws 63 random bits. For bounds that are not a power of two
/// the top partial bucket of the domain is rejected and redrawn, so every
/// value in `[0, n)` is equally likely.
#[derive(Debug, Clone)]
pub struct UnbiasedRangeGenerator<R = StdRng> {
    rng: R,
}

impl UnbiasedRangeGenerator<StdRng> {
    /// Create a deterministic generator from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UnbiasedRangeGenerator<R> {
    /// Wrap an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a uniformly distributed integer in `[0, bound)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bound` is zero or exceeds the 63-bit domain
    pub fn next(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 || bound > DOMAIN {
            return Err(invalid_argument(
                "bound",
                &bound,
                &"must be in the range (0, 2^63]",
            ));
        }

        if bound.is_power_of_two() {
            return Ok(self.draw() & (bound - 1));
        }

        // Largest multiple of bound that fits in the domain
        let limit = DOMAIN - DOMAIN % bound;
        loop {
            let bits = self.draw();
            if bits < limit {
                return Ok(bits % bound);
            }
        }
    }

    /// Access the wrapped random source
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn draw(&mut self) -> u64 {
        self.rng.next_u64() >> 1
    }
}
