//! Graph index: the colony's shared environment.
//!
//! The index is a dense arena of adjacency rows, one per node id. Each row
//! maps a neighbor to the [`Trail`] leading there: a pheromone level that
//! rounds of ants reinforce and evaporate, and a static desirability equal
//! to the reciprocal of the edge cost.
//!
//! Both directions of an edge live in separate rows and evolve separately,
//! so `a → b` and `b → a` can carry different pheromone during a run even
//! though the input graph is undirected.

use crate::types::{Cost, Edge, NodeId};
use serde::{Deserialize, Serialize};

/// Pheromone placed on every directed trail when the index is built.
pub const INITIAL_PHEROMONE: f64 = 0.3;

/// State of one directed trail `a → b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    /// Current pheromone level, never negative.
    pub pheromone: f64,
    /// `1 / cost`, fixed for the lifetime of the index.
    pub desirability: f64,
}

impl Trail {
    fn new(pheromone: f64, cost: Cost) -> Self {
        Self {
            pheromone,
            desirability: 1.0 / f64::from(cost),
        }
    }

    /// An ant's unnormalized desire to follow this trail:
    /// `pheromone^pheromone_exponent × desirability^distance_exponent`.
    pub fn desire(&self, pheromone_exponent: f64, distance_exponent: f64) -> f64 {
        self.pheromone.powf(pheromone_exponent) * self.desirability.powf(distance_exponent)
    }

    /// Length of the trail, the reciprocal of its desirability.
    pub fn distance(&self) -> f64 {
        1.0 / self.desirability
    }

    /// Cost recovered from the desirability, rounded to the nearest integer.
    pub fn cost(&self) -> Cost {
        self.distance().round() as Cost
    }
}

/// Outgoing trails of one node, in first-insertion order.
///
/// Order matters: it is the order of the cumulative choice table in a walk
/// and the tie-break order of the best-path extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyRow {
    entries: Vec<(NodeId, Trail)>,
}

impl AdjacencyRow {
    /// Insert or overwrite the trail to `to`. An overwrite keeps the
    /// neighbor's original position.
    fn insert(&mut self, to: NodeId, trail: Trail) {
        match self.entries.iter_mut().find(|(n, _)| *n == to) {
            Some(entry) => entry.1 = trail,
            None => self.entries.push((to, trail)),
        }
    }

    pub fn get(&self, to: NodeId) -> Option<&Trail> {
        self.entries.iter().find(|(n, _)| *n == to).map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Trail)> + '_ {
        self.entries.iter().map(|(n, t)| (*n, t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dense adjacency index built from an edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphIndex {
    rows: Vec<AdjacencyRow>,
}

impl GraphIndex {
    /// Build an index with every trail at [`INITIAL_PHEROMONE`].
    pub fn build(edges: &[Edge]) -> Self {
        Self::with_initial_pheromone(edges, INITIAL_PHEROMONE)
    }

    /// Build an index with every trail at `initial_pheromone`.
    ///
    /// The vertex count is one past the largest id in `edges` (zero for an
    /// empty list). Duplicate pairs are not merged: a later edge overwrites
    /// the trails of an earlier one.
    pub fn with_initial_pheromone(edges: &[Edge], initial_pheromone: f64) -> Self {
        let vertex_count = edges
            .iter()
            .map(|e| e.node_a().max(e.node_b()).index() + 1)
            .max()
            .unwrap_or(0);

        let mut rows = vec![AdjacencyRow::default(); vertex_count];
        for edge in edges {
            let trail = Trail::new(initial_pheromone, edge.cost());
            rows[edge.node_a().index()].insert(edge.node_b(), trail);
            rows[edge.node_b().index()].insert(edge.node_a(), trail);
        }

        Self { rows }
    }

    /// Number of node ids, `V`. Every id in `[0, V)` has a row.
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `node` falls inside `[0, V)`.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.rows.len()
    }

    /// Number of undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.directed_trails().filter(|(a, b, _)| a <= b).count()
    }

    pub fn row(&self, node: NodeId) -> Option<&AdjacencyRow> {
        self.rows.get(node.index())
    }

    /// Outgoing trails of `node`; empty for ids outside the graph.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Trail)> + '_ {
        self.row(node).into_iter().flat_map(AdjacencyRow::iter)
    }

    pub fn trail(&self, from: NodeId, to: NodeId) -> Option<&Trail> {
        self.row(from)?.get(to)
    }

    /// Pheromone on `from → to`, or `0.0` when there is no such trail.
    pub fn pheromone(&self, from: NodeId, to: NodeId) -> f64 {
        self.trail(from, to).map_or(0.0, |t| t.pheromone)
    }

    /// Every directed trail as `(from, to, trail)`, row by row.
    pub fn directed_trails(&self) -> impl Iterator<Item = (NodeId, NodeId, &Trail)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            let from = NodeId(i as u16);
            row.iter().map(move |(to, trail)| (from, to, trail))
        })
    }

    /// Sum of pheromone over every directed trail.
    pub fn total_pheromone(&self) -> f64 {
        self.directed_trails().map(|(_, _, t)| t.pheromone).sum()
    }

    /// End-of-round pheromone update.
    ///
    /// Every trail evaporates to `pheromone × residue_factor`, then gains
    /// whatever `deposit(from, to)` returns. Trails nobody walked only
    /// evaporate.
    pub fn update_pheromones<F>(&mut self, residue_factor: f64, mut deposit: F)
    where
        F: FnMut(NodeId, NodeId) -> f64,
    {
        for (i, row) in self.rows.iter_mut().enumerate() {
            let from = NodeId(i as u16);
            for (to, trail) in row.entries.iter_mut() {
                trail.pheromone = trail.pheromone * residue_factor + deposit(from, *to);
            }
        }
    }
}
