#![allow(dead_code)] // Each test binary uses a different subset of helpers

use bs_surface::MarketParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Absolute tolerance for closed-form identities.
pub const TOL: f64 = 1e-6;

/// At-the-money one-year option used for the reference values
pub fn reference_params() -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).expect("reference params are valid")
}

/// Deterministic sample of valid market parameters spanning the dashboard's
/// input ranges.
pub fn random_params(count: usize, seed: u64) -> Vec<MarketParameters> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            MarketParameters::new(
                rng.gen_range(20.0..300.0),
                rng.gen_range(20.0..300.0),
                rng.gen_range(0.01..5.0),
                rng.gen_range(0.0..0.15),
                rng.gen_range(0.01..1.0),
            )
            .expect("sampled params are valid")
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {}, got {} (tol {})",
        what,
        expected,
        actual,
        tol
    );
}
