//! Random sources and probability gates.

/// A uniform random integer source.
pub trait Random {
    /// Returns a uniformly distributed integer in `0..upper`, or `0` when `upper` is `0`.
    fn random(&mut self, upper: u32) -> u32;
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> Random for R {
    #[inline]
    fn random(&mut self, upper: u32) -> u32 {
        use rand::Rng;

        if upper == 0 {
            0
        } else {
            self.gen_range(0..upper)
        }
    }
}

/// A scripted [`Random`] source that replays a fixed list of draws in a loop.
///
/// Each draw is reduced modulo the requested upper bound.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Sequence {
    draws: Vec<u32>,
    position: usize,
    consumed: usize,
}

impl Sequence {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            position: 0,
            consumed: 0,
        }
    }

    /// Number of draws taken so far.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Random for Sequence {
    fn random(&mut self, upper: u32) -> u32 {
        self.consumed += 1;
        let Some(&draw) = self.draws.get(self.position) else {
            return 0;
        };
        self.position = (self.position + 1) % self.draws.len();
        draw.checked_rem(upper).unwrap_or(0)
    }
}

/// Returns `true` with probability `(frequency + 1) / 256`.
///
/// A `frequency` of `0` is always `false` and `255` is always `true`; neither draws from `rng`.
#[must_use]
pub fn do_randomly<R: Random + ?Sized>(frequency: u8, rng: &mut R) -> bool {
    match frequency {
        0 => false,
        u8::MAX => true,
        _ => {
            let draw = rng.random(256);
            tracing::trace!(frequency, draw, "random gate");
            draw <= u32::from(frequency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_replays() {
        let mut rng = Sequence::new([3, 10, 256]);
        assert_eq!(rng.random(256), 3);
        assert_eq!(rng.random(4), 2);
        assert_eq!(rng.random(256), 0);
        assert_eq!(rng.random(256), 3);
        assert_eq!(rng.random(0), 0);
        assert_eq!(rng.consumed(), 5);
        assert_eq!(Sequence::default().random(10), 0);
    }

    #[test]
    fn extremes_never_draw() {
        let mut rng = Sequence::new([0, 255]);
        for _ in 0..1000 {
            assert!(!do_randomly(0, &mut rng));
            assert!(do_randomly(255, &mut rng));
        }
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn inclusive_threshold() {
        let mut rng = Sequence::new([63, 64, 0, 255]);
        assert!(do_randomly(63, &mut rng));
        assert!(!do_randomly(63, &mut rng));
        assert!(do_randomly(1, &mut rng));
        assert!(!do_randomly(254, &mut rng));
        assert_eq!(rng.consumed(), 4);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn empirical_rate() {
        use rand::{rngs::StdRng, SeedableRng};

        const TRIALS: u32 = 200_000;
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for frequency in [1u8, 63, 127, 200, 254] {
            let hits = (0..TRIALS)
                .filter(|_| do_randomly(frequency, &mut rng))
                .count();
            let rate = hits as f64 / f64::from(TRIALS);
            let expected = (f64::from(frequency) + 1.0) / 256.0;
            assert!(
                (rate - expected).abs() < 0.005,
                "frequency {frequency}: rate {rate}, expected {expected}"
            );
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn rng_stays_in_bounds() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for upper in [1, 2, 3, 255, 256, 1000] {
            for _ in 0..1000 {
                assert!(Random::random(&mut rng, upper) < upper);
            }
        }
        assert_eq!(Random::random(&mut rng, 0), 0);
    }
}
