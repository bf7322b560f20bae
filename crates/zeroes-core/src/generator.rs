//! Deterministic array generator used by the CLI `generate` subcommand,
//! the bench harness, and the tests.

use rand::{rngs::StdRng, Rng as _, SeedableRng};

use crate::Element;

/// Largest magnitude of a generated non-zero value.
pub const MAX_MAGNITUDE: Element = 1000;

/// Generate `len` elements where each one is zero with probability
/// `zero_ratio` and otherwise a non-zero value in
/// `[-MAX_MAGNITUDE, MAX_MAGNITUDE]`.
///
/// `zero_ratio` is clamped to `[0, 1]` (NaN counts as 0). The same `seed`
/// always yields the same array.
#[must_use]
pub fn generate_array(len: usize, zero_ratio: f64, seed: u64) -> Vec<Element> {
    let p = if zero_ratio.is_nan() {
        0.0
    } else {
        zero_ratio.clamp(0.0, 1.0)
    };
    let mut rng = StdRng::seed_from_u64(seed);

    (0..len)
        .map(|_| {
            if rng.random_bool(p) {
                0
            } else {
                let v = rng.random_range(1..=MAX_MAGNITUDE);
                if rng.random_bool(0.5) {
                    -v
                } else {
                    v
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_array() {
        assert_eq!(generate_array(64, 0.3, 7), generate_array(64, 0.3, 7));
        assert_eq!(generate_array(0, 0.3, 7), Vec::<Element>::new());
    }

    #[test]
    fn ratio_extremes() {
        assert!(generate_array(50, 1.0, 1).iter().all(|&v| v == 0));
        assert!(generate_array(50, 0.0, 1).iter().all(|&v| v != 0));
        // Out-of-range and NaN ratios are clamped instead of panicking.
        assert!(generate_array(50, 7.5, 1).iter().all(|&v| v == 0));
        assert!(generate_array(50, f64::NAN, 1).iter().all(|&v| v != 0));
    }

    #[test]
    fn values_stay_in_range() {
        assert!(generate_array(500, 0.2, 99)
            .iter()
            .all(|v| v.abs() <= MAX_MAGNITUDE));
    }
}
