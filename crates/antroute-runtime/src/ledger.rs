//! Deferred pheromone deposits for one round.
//!
//! Ants never write to the graph directly. Each successful walk records
//! its deposit here, and the colony applies the whole ledger once, after
//! every ant of the round has walked on the same unmodified trails.

use crate::ant::AntTrail;
use antroute_core::types::NodeId;
use std::collections::HashMap;

/// Pheromone accumulated per directed trail during a round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositLedger {
    deposits: HashMap<(NodeId, NodeId), f64>,
}

impl DepositLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger of a single ant: `amount` on every trail it walked.
    pub fn for_trail(trail: &AntTrail, amount: f64) -> Self {
        let mut ledger = Self::new();
        ledger.record(trail, amount);
        ledger
    }

    /// Add `amount` to every trail `trail` walked, in walking direction.
    pub fn record(&mut self, trail: &AntTrail, amount: f64) {
        for hop in trail.path().hops() {
            *self.deposits.entry(hop).or_insert(0.0) += amount;
        }
    }

    /// Fold another ledger into this one.
    pub fn merge(&mut self, other: DepositLedger) {
        for (hop, amount) in other.deposits {
            *self.deposits.entry(hop).or_insert(0.0) += amount;
        }
    }

    /// Amount accumulated on `from → to`, `0.0` if nothing was deposited.
    pub fn amount(&self, from: NodeId, to: NodeId) -> f64 {
        self.deposits.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Sum over all trails.
    pub fn total(&self) -> f64 {
        self.deposits.values().sum()
    }

    /// Number of directed trails that received a deposit.
    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::walk;
    use crate::config::ColonyConfig;
    use crate::rng::ScriptedDraws;
    use antroute_core::graph::GraphIndex;
    use antroute_core::types::Edge;

    fn trail(triples: &[(u16, u16, u16)], start: u16, end: u16) -> AntTrail {
        let graph = GraphIndex::build(&Edge::from_triples(triples).unwrap());
        walk(
            NodeId(start),
            NodeId(end),
            &graph,
            &ColonyConfig::default(),
            &mut ScriptedDraws::default(),
        )
        .trail()
        .cloned()
        .unwrap()
    }

    #[test]
    fn record_is_directional_and_accumulates() {
        let t = trail(&[(1, 2, 1), (2, 3, 1)], 1, 3);
        let mut ledger = DepositLedger::new();
        ledger.record(&t, 0.5);
        ledger.record(&t, 0.25);

        assert_eq!(ledger.amount(NodeId(1), NodeId(2)), 0.75);
        assert_eq!(ledger.amount(NodeId(2), NodeId(3)), 0.75);
        assert_eq!(ledger.amount(NodeId(2), NodeId(1)), 0.0);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 1.5);
    }

    #[test]
    fn merge_adds_per_trail() {
        let forward = trail(&[(1, 2, 1)], 1, 2);
        let backward = trail(&[(1, 2, 1)], 2, 1);

        let mut a = DepositLedger::new();
        a.record(&forward, 1.0);
        let mut b = DepositLedger::new();
        b.record(&forward, 2.0);
        b.record(&backward, 4.0);

        a.merge(b);
        assert_eq!(a.amount(NodeId(1), NodeId(2)), 3.0);
        assert_eq!(a.amount(NodeId(2), NodeId(1)), 4.0);
    }

    #[test]
    fn per_ant_ledgers_merge_into_round_total() {
        let t = trail(&[(1, 2, 1), (2, 3, 1)], 1, 3);
        let mut round = DepositLedger::new();
        round.merge(DepositLedger::for_trail(&t, 0.5));
        round.merge(DepositLedger::for_trail(&t, 0.5));
        assert_eq!(round.amount(NodeId(1), NodeId(2)), 1.0);
        assert_eq!(round.total(), 2.0);
    }

    #[test]
    fn empty_ledger() {
        let ledger = DepositLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
    }
}
