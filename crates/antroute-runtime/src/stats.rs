//! Per-round and per-colony statistics.

use serde::Serialize;

/// What happened during one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundStats {
    /// 1-based round number; matches the snapshot taken after it.
    pub round: usize,
    pub successful_ants: usize,
    pub failed_ants: usize,
    /// Shortest distance walked by an ant this round.
    pub best_distance: Option<f64>,
    /// Pheromone added this round, after the deposit coefficient.
    pub deposited: f64,
}

/// Totals across every round a colony has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColonyStats {
    pub rounds: usize,
    pub successful_ants: usize,
    pub failed_ants: usize,
    pub best_distance: Option<f64>,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    /// Sum of pheromone over every directed trail right now.
    pub total_pheromone: f64,
}

impl ColonyStats {
    /// Share of ants that reached the destination; `0.0` before any round.
    pub fn success_rate(&self) -> f64 {
        let total = self.successful_ants + self.failed_ants;
        if total == 0 {
            0.0
        } else {
            self.successful_ants as f64 / total as f64
        }
    }
}

/// Smaller of two optional distances.
pub(crate) fn min_distance(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}
