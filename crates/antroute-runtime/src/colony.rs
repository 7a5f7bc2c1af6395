//! Colony: rounds of ants over one graph index.
//!
//! The colony owns the graph index for a single search. Each round:
//! 1. Every ant walks from start on the same, unmodified trails
//! 2. Successful walks are folded into a deposit ledger
//! 3. Every trail evaporates, then the ledger is applied
//! 4. A snapshot of the updated trails is recorded
//!
//! Walking and updating are separate phases: the graph is borrowed
//! immutably while ants walk and mutably only once the ledger is complete,
//! so no ant ever sees a sibling's deposit from the same round.

use crate::ant::{walk, WalkOutcome};
use crate::config::ColonyConfig;
use crate::extract::extract_best_path;
use crate::ledger::DepositLedger;
use crate::stats::{min_distance, ColonyStats, RoundStats};
use antroute_core::choice::DrawSource;
use antroute_core::error::Result;
use antroute_core::graph::GraphIndex;
use antroute_core::path::Path;
use antroute_core::snapshot::Snapshot;
use antroute_core::types::{Edge, NodeId};
use tracing::{debug, trace};

/// The colony. Owns the trails and runs rounds of ants.
#[derive(Debug, Clone)]
pub struct Colony {
    graph: GraphIndex,
    config: ColonyConfig,
    history: Vec<RoundStats>,
}

impl Colony {
    /// Create a colony over `edges` with default configuration.
    pub fn new(edges: &[Edge]) -> Self {
        let config = ColonyConfig::default();
        Self {
            graph: GraphIndex::with_initial_pheromone(edges, config.initial_pheromone),
            config,
            history: Vec::new(),
        }
    }

    /// Create a colony over `edges` with the specified configuration.
    pub fn from_config(edges: &[Edge], config: ColonyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph: GraphIndex::with_initial_pheromone(edges, config.initial_pheromone),
            config,
            history: Vec::new(),
        })
    }

    pub fn graph(&self) -> &GraphIndex {
        &self.graph
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Statistics of every round run so far, oldest first.
    pub fn history(&self) -> &[RoundStats] {
        &self.history
    }

    /// Snapshot of the trails as they are now, numbered after the last
    /// completed round.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.history.len(), &self.graph)
    }

    /// Run one round: walk every ant, then evaporate and deposit.
    pub fn run_round<D>(&mut self, start: NodeId, destination: NodeId, draws: &mut D) -> RoundStats
    where
        D: DrawSource + ?Sized,
    {
        let round = self.history.len() + 1;

        // Phase 1: every ant walks the same trails
        let outcomes: Vec<WalkOutcome> = (0..self.config.ants_per_round)
            .map(|_| walk(start, destination, &self.graph, &self.config, draws))
            .collect();

        // Phase 2: one ledger per successful ant, merged into the round's
        let mut ledger = DepositLedger::new();
        let mut successful_ants = 0;
        let mut best_distance = None;
        for outcome in &outcomes {
            match outcome {
                WalkOutcome::Arrived(trail) => {
                    successful_ants += 1;
                    best_distance = min_distance(best_distance, Some(trail.distance()));
                    if let Some(amount) = trail.deposit(self.config.rank_exponent) {
                        ledger.merge(DepositLedger::for_trail(trail, amount));
                    }
                    trace!(round, distance = trail.distance(), hops = trail.path().hop_count(), "ant arrived");
                }
                WalkOutcome::DeadEnd { at, steps } => {
                    trace!(round, at = at.0, steps, "ant hit a dead end");
                }
            }
        }

        // Phase 3: evaporate everything, then apply the ledger
        let coefficient = self.config.deposit_coefficient;
        self.graph.update_pheromones(self.config.residue_factor, |from, to| {
            coefficient * ledger.amount(from, to)
        });

        let stats = RoundStats {
            round,
            successful_ants,
            failed_ants: outcomes.len() - successful_ants,
            best_distance,
            deposited: coefficient * ledger.total(),
        };
        debug!(
            round,
            successful = stats.successful_ants,
            failed = stats.failed_ants,
            trails_reinforced = ledger.len(),
            "round complete"
        );

        self.history.push(stats.clone());
        stats
    }

    /// Run every configured round and return the snapshots, starting with
    /// the state before the first round. Always `rounds + 1` long.
    pub fn run<D>(&mut self, start: NodeId, destination: NodeId, draws: &mut D) -> Vec<Snapshot>
    where
        D: DrawSource + ?Sized,
    {
        self.run_with(start, destination, draws, |_| {})
    }

    /// Like [`Colony::run`], calling `on_round` after each round.
    pub fn run_with<D, F>(
        &mut self,
        start: NodeId,
        destination: NodeId,
        draws: &mut D,
        mut on_round: F,
    ) -> Vec<Snapshot>
    where
        D: DrawSource + ?Sized,
        F: FnMut(&RoundStats),
    {
        let mut snapshots = Vec::with_capacity(self.config.rounds + 1);
        snapshots.push(self.snapshot());
        for _ in 0..self.config.rounds {
            let stats = self.run_round(start, destination, draws);
            on_round(&stats);
            snapshots.push(self.snapshot());
        }
        snapshots
    }

    /// Best route on the current trails. See [`extract_best_path`].
    pub fn best_path(&self, start: NodeId, destination: NodeId) -> Option<Path> {
        extract_best_path(start, destination, &self.graph, &self.config)
    }

    /// Totals over the rounds run so far.
    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            rounds: self.history.len(),
            successful_ants: self.history.iter().map(|r| r.successful_ants).sum(),
            failed_ants: self.history.iter().map(|r| r.failed_ants).sum(),
            best_distance: self
                .history
                .iter()
                .fold(None, |best, r| min_distance(best, r.best_distance)),
            graph_nodes: self.graph.vertex_count(),
            graph_edges: self.graph.edge_count(),
            total_pheromone: self.graph.total_pheromone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedDraws, SimRng};

    fn edges(triples: &[(u16, u16, u16)]) -> Vec<Edge> {
        Edge::from_triples(triples).unwrap()
    }

    #[test]
    fn run_records_rounds_plus_one_snapshots() {
        let mut colony = Colony::new(&edges(&[(1, 2, 1), (2, 3, 1)]));
        let snapshots = colony.run(NodeId(1), NodeId(3), &mut SimRng::new(1));
        assert_eq!(snapshots.len(), 11);
        assert_eq!(snapshots[0].round, 0);
        assert_eq!(snapshots[10].round, 10);
        assert_eq!(colony.history().len(), 10);
    }

    #[test]
    fn from_config_rejects_invalid_parameters() {
        let config = ColonyConfig {
            residue_factor: 2.0,
            ..Default::default()
        };
        assert!(Colony::from_config(&edges(&[(1, 2, 1)]), config).is_err());
    }

    #[test]
    fn single_round_applies_evaporation_then_deposit() {
        // A line 1 - 2 with one ant: the only possible walk
        let config = ColonyConfig::default().with_ants_per_round(1).with_rounds(1);
        let mut colony = Colony::from_config(&edges(&[(1, 2, 4)]), config).unwrap();
        let stats = colony.run_round(NodeId(1), NodeId(2), &mut ScriptedDraws::default());

        // 0.3 × 0.64 + 2.0 × (1/4)^0.8
        let expected = 0.3 * 0.64 + 2.0 * 0.25f64.powf(0.8);
        let g = colony.graph();
        assert!((g.pheromone(NodeId(1), NodeId(2)) - expected).abs() < 1e-12);
        assert!((g.pheromone(NodeId(2), NodeId(1)) - 0.3 * 0.64).abs() < 1e-12);

        assert_eq!(stats.successful_ants, 1);
        assert_eq!(stats.failed_ants, 0);
        assert_eq!(stats.best_distance, Some(4.0));
        assert!((stats.deposited - 2.0 * 0.25f64.powf(0.8)).abs() < 1e-12);
    }

    #[test]
    fn ants_in_a_round_share_the_same_trails() {
        // With deposits applied in place, the second ant would see a
        // reinforced 1 -> 2 and the scripted draw would pick it again.
        // Deferred deposits keep the table identical for both ants.
        let config = ColonyConfig::default().with_ants_per_round(2);
        let mut colony =
            Colony::from_config(&edges(&[(1, 2, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)]), config)
                .unwrap();
        // First ant: 0.4 < 0.5 picks 2. Second ant: 0.6 picks 3.
        let mut draws = ScriptedDraws::new(vec![0.4, 0.0, 0.6, 0.0]);
        colony.run_round(NodeId(1), NodeId(4), &mut draws);

        let g = colony.graph();
        assert!((g.pheromone(NodeId(1), NodeId(2)) - g.pheromone(NodeId(1), NodeId(3))).abs() < 1e-12);
        assert!(g.pheromone(NodeId(1), NodeId(2)) > 0.3 * 0.64);
    }

    #[test]
    fn deposits_of_ants_on_the_same_trail_add_up() {
        let config = ColonyConfig::default().with_ants_per_round(3);
        let mut colony = Colony::from_config(&edges(&[(1, 2, 4)]), config).unwrap();
        let stats = colony.run_round(NodeId(1), NodeId(2), &mut ScriptedDraws::default());

        let per_ant = 0.25f64.powf(0.8);
        let expected = 0.3 * 0.64 + 2.0 * 3.0 * per_ant;
        assert!((colony.graph().pheromone(NodeId(1), NodeId(2)) - expected).abs() < 1e-12);
        assert!((stats.deposited - 2.0 * 3.0 * per_ant).abs() < 1e-12);
    }

    #[test]
    fn failed_round_only_evaporates() {
        let mut colony = Colony::new(&edges(&[(1, 2, 1), (5, 6, 1)]));
        let before = colony.graph().clone();
        let stats = colony.run_round(NodeId(1), NodeId(6), &mut SimRng::new(3));

        assert_eq!(stats.successful_ants, 0);
        assert_eq!(stats.failed_ants, 25);
        assert_eq!(stats.deposited, 0.0);
        for (from, to, trail) in colony.graph().directed_trails() {
            let old = before.pheromone(from, to);
            assert!(trail.pheromone < old);
            assert!(trail.pheromone >= 0.0);
        }
    }

    #[test]
    fn run_with_reports_each_round() {
        let config = ColonyConfig::default().with_rounds(4);
        let mut colony = Colony::from_config(&edges(&[(1, 2, 1)]), config).unwrap();
        let mut seen = Vec::new();
        colony.run_with(NodeId(1), NodeId(2), &mut SimRng::new(5), |r| seen.push(r.round));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stats_aggregate_history() {
        let config = ColonyConfig::default().with_rounds(3).with_ants_per_round(5);
        let mut colony = Colony::from_config(&edges(&[(1, 2, 2)]), config).unwrap();
        colony.run(NodeId(1), NodeId(2), &mut SimRng::new(9));

        let stats = colony.stats();
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.successful_ants, 15);
        assert_eq!(stats.failed_ants, 0);
        assert_eq!(stats.best_distance, Some(2.0));
        assert_eq!(stats.graph_nodes, 3);
        assert_eq!(stats.graph_edges, 1);
        assert_eq!(stats.success_rate(), 1.0);
    }
}
