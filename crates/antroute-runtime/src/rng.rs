//! Draw sources for ant walks.
//!
//! [`SimRng`] wraps a PCG generator seeded from a single `u64`, so a run
//! can be replayed exactly from its seed. [`ScriptedDraws`] replays a fixed
//! list of values and is what tests use to pin individual choices.

use antroute_core::choice::DrawSource;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Deterministic, seedable random source.
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg64,
}

impl SimRng {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create a generator from a fresh random seed. The seed stays readable
    /// through [`SimRng::seed`] so the run can be reproduced.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DrawSource for SimRng {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out.
///
/// An empty script always draws `0.0`, which selects the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always draw `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = SimRng::new(7);
        for _ in 0..10_000 {
            let x = rng.draw();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn scripted_draws_cycle() {
        let mut draws = ScriptedDraws::new(vec![0.1, 0.9]);
        assert_eq!(draws.draw(), 0.1);
        assert_eq!(draws.draw(), 0.9);
        assert_eq!(draws.draw(), 0.1);
        assert_eq!(draws.draws_taken(), 3);
    }

    #[test]
    fn empty_script_draws_zero() {
        let mut draws = ScriptedDraws::default();
        assert_eq!(draws.draw(), 0.0);
    }
}
