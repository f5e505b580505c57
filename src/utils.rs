//! Utility functions for random number generation and sampling helpers.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast seedable RNG used for datasets and initial weights.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use perceptron_rs::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from thread-local RNG.
#[inline]
pub fn rng_from_entropy() -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// Draws a value uniformly from the open interval (0, 1).
///
/// `random::<f64>()` samples [0, 1); zero is redrawn.
#[inline]
pub fn random_nonzero_unit<R: Rng>(rng: &mut R) -> f64 {
    loop {
        let v = rng.random::<f64>();
        if v != 0.0 {
            return v;
        }
    }
}

/// # Overview
///
/// Draws an integer bias uniformly from `[-range, range)`, or 0 when the
/// range is 0.
#[inline]
pub fn random_bias<R: Rng>(rng: &mut R, range: u32) -> f64 {
    if range == 0 {
        return 0.0;
    }
    let r = range as i64;
    rng.random_range(-r..r) as f64
}

/// # Overview
///
/// `k` evenly spaced values over `[start, stop]`, endpoints included.
///
/// `k == 0` yields nothing and `k == 1` yields only `start`.
pub fn linspace(start: f64, stop: f64, k: usize) -> Vec<f64> {
    match k {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (k - 1) as f64;
            (0..k)
                .map(|i| if i == k - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}
