//! Random weight generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Draws `count` weights in (-1.0, 1.0).
///
/// Each weight is the difference of two independent uniform draws in [0, 1), which gives a
/// triangular distribution centred on zero.
pub(crate) fn random_weights<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count)
        .map(|_| rng.gen::<f64>() - rng.gen::<f64>())
        .collect()
}

/// Creates a generator seeded from the current time in nanoseconds.
pub(crate) fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}
