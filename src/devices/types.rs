//! Shared helpers for device models.

use rand::{Rng, rngs::StdRng};

/// Draws a uniform sample from the symmetric band `[-half_band, half_band]`.
///
/// Returns 0.0 for a non-positive band so a zeroed noise setting is exactly
/// deterministic (no RNG draw is consumed).
///
/// # Arguments
///
/// * `rng` - Random number generator
/// * `half_band` - Half-width of the band (kW)
pub fn uniform_noise(rng: &mut StdRng, half_band: f64) -> f64 {
    if half_band <= 0.0 {
        return 0.0;
    }
    (rng.random::<f64>() - 0.5) * 2.0 * half_band
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn zero_band_is_silent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform_noise(&mut rng, 0.0), 0.0);
        assert_eq!(uniform_noise(&mut rng, -3.0), 0.0);
    }

    #[test]
    fn zero_band_consumes_no_draws() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        uniform_noise(&mut a, 0.0);
        assert_eq!(uniform_noise(&mut a, 5.0), uniform_noise(&mut b, 5.0));
    }

    #[test]
    fn samples_stay_inside_band() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let n = uniform_noise(&mut rng, 25.0);
            assert!((-25.0..=25.0).contains(&n));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(uniform_noise(&mut a, 20.0), uniform_noise(&mut b, 20.0));
        }
    }
}
