//! Colony tuning parameters.

use antroute_core::error::{AntRouteError, Result};
use antroute_core::graph::INITIAL_PHEROMONE;
use serde::{Deserialize, Serialize};

/// Configuration for colony search parameters.
///
/// Use with [`Colony::from_config`](crate::colony::Colony::from_config)
/// or [`search`](crate::search::search). Every field has a serde default,
/// so a partial TOML table fills in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Pheromone on every trail before the first round (default: 0.3).
    pub initial_pheromone: f64,
    /// Fraction of pheromone left after evaporation each round (default: 0.64).
    pub residue_factor: f64,
    /// How strongly ants follow pheromone, α (default: 4.0).
    pub pheromone_exponent: f64,
    /// How strongly ants prefer cheap trails, β (default: 1.0).
    pub distance_exponent: f64,
    /// Number of rounds (default: 10).
    pub rounds: usize,
    /// Ants sent out per round (default: 25).
    pub ants_per_round: usize,
    /// Multiplier applied to a round's accumulated deposits (default: 2.0).
    pub deposit_coefficient: f64,
    /// Exponent on `1 / distance` when an ant deposits, γ (default: 0.8).
    pub rank_exponent: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            initial_pheromone: INITIAL_PHEROMONE,
            residue_factor: 0.64,
            pheromone_exponent: 4.0,
            distance_exponent: 1.0,
            rounds: 10,
            ants_per_round: 25,
            deposit_coefficient: 2.0,
            rank_exponent: 0.8,
        }
    }
}

impl ColonyConfig {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_ants_per_round(mut self, ants: usize) -> Self {
        self.ants_per_round = ants;
        self
    }

    /// Check every parameter.
    ///
    /// `residue_factor` must lie in `[0, 1)` so unvisited trails always
    /// decay; exponents, the initial level and the deposit coefficient must
    /// be positive and finite; at least one ant must run per round.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.residue_factor) {
            return Err(AntRouteError::out_of_range(
                "residue_factor",
                0.0,
                1.0,
                self.residue_factor,
            ));
        }

        let positive = [
            ("initial_pheromone", self.initial_pheromone),
            ("pheromone_exponent", self.pheromone_exponent),
            ("distance_exponent", self.distance_exponent),
            ("deposit_coefficient", self.deposit_coefficient),
            ("rank_exponent", self.rank_exponent),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(AntRouteError::invalid_config(
                    field,
                    value.to_string(),
                    "must be positive and finite",
                ));
            }
        }

        if self.ants_per_round == 0 {
            return Err(AntRouteError::invalid_config(
                "ants_per_round",
                "0",
                "at least one ant per round",
            ));
        }

        Ok(())
    }
}
