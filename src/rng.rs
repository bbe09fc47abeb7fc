//! Source of randomness for piece placement.

use rand::Rng;

use crate::piece::Orientation;

/// Uniform draws used by the fleet initializer.
pub trait Randomizer {
    /// Integer in `[0, n)`. `n` must be non-zero.
    fn uniform_int(&mut self, n: usize) -> usize;

    /// Horizontal or vertical with equal probability.
    fn random_orientation(&mut self) -> Orientation;
}

impl<R: Rng + ?Sized> Randomizer for R {
    fn uniform_int(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn random_orientation(&mut self) -> Orientation {
        if self.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn uniform_int_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in 1..20 {
            for _ in 0..50 {
                assert!(rng.uniform_int(n) < n);
            }
        }
    }

    #[test]
    fn both_orientations_show_up() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut horizontal = 0;
        for _ in 0..200 {
            if rng.random_orientation() == Orientation::Horizontal {
                horizontal += 1;
            }
        }
        assert!(horizontal > 0 && horizontal < 200);
    }
}
