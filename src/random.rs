//! Source of uniform random integers, injectable so games can be replayed.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

/// Produces uniformly distributed integers in `[0, n)`.
pub trait RandomSource {
    /// Uniform value in `[0, n)`. Returns 0 when `n` is 0.
    fn rand_int(&mut self, n: usize) -> usize;

    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.rand_int(2) == 0
    }
}

impl RandomSource for SmallRng {
    fn rand_int(&mut self, n: usize) -> usize {
        if n == 0 {
            0
        } else {
            self.random_range(0..n)
        }
    }
}

/// A fixed, cycling sequence of values. Each call returns the next value
/// reduced modulo `n`, which makes scripted tests independent of board size.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRandom {
    fn rand_int(&mut self, n: usize) -> usize {
        if n == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v % n
    }
}

/// `SmallRng` seeded from `seed`, or from the thread RNG when `None`.
#[cfg(feature = "std")]
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    use rand::SeedableRng;
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sequence_cycles_and_reduces() {
        let mut seq = SequenceRandom::new([3, 12, 7]);
        assert_eq!(seq.rand_int(10), 3);
        assert_eq!(seq.rand_int(10), 2);
        assert_eq!(seq.rand_int(5), 2);
        assert_eq!(seq.rand_int(10), 3);
        assert_eq!(seq.draws(), 4);
    }

    #[test]
    fn small_rng_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in 1..20 {
            assert!(rng.rand_int(n) < n);
        }
        assert_eq!(rng.rand_int(0), 0);
    }
}
