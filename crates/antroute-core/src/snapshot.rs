//! Snapshots: replayable views of pheromone levels.
//!
//! One snapshot per round (plus the initial state) lets a renderer animate
//! how the colony converges. Each undirected pair appears at most once,
//! read in whichever direction carries more pheromone.

use crate::graph::GraphIndex;
use crate::types::{Edge, NodeId};
use serde::{Deserialize, Serialize};

/// Pheromone on one directed edge at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PheromoneLevel {
    /// The edge, read in its dominant direction.
    pub edge: Edge,
    pub pheromone: f64,
}

/// Pheromone levels of the whole graph after a round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// `0` for the initial state, `r` after the `r`-th round.
    pub round: usize,
    pub levels: Vec<PheromoneLevel>,
}

impl Snapshot {
    /// Capture the current pheromone levels of `graph`.
    ///
    /// Every pair `i < j` of node ids is considered, in order. The reverse
    /// direction `j → i` wins only when it is strictly greater than
    /// `i → j`; otherwise `i → j` is emitted if positive. Pairs with no
    /// positive pheromone either way are left out.
    pub fn capture(round: usize, graph: &GraphIndex) -> Self {
        let v = graph.vertex_count();
        let mut levels = Vec::new();

        for i in 0..v {
            let a = NodeId(i as u16);
            for j in (i + 1)..v {
                let b = NodeId(j as u16);
                let straight = graph.trail(a, b);
                let inverted = graph.trail(b, a);
                let p_straight = straight.map_or(0.0, |t| t.pheromone);
                let p_inverted = inverted.map_or(0.0, |t| t.pheromone);

                if p_inverted > p_straight && p_inverted > 0.0 {
                    if let Some(trail) = inverted {
                        levels.push(PheromoneLevel {
                            edge: Edge::directed(b, a, trail.cost()),
                            pheromone: p_inverted,
                        });
                    }
                } else if p_straight > 0.0 {
                    if let Some(trail) = straight {
                        levels.push(PheromoneLevel {
                            edge: Edge::directed(a, b, trail.cost()),
                            pheromone: p_straight,
                        });
                    }
                }
            }
        }

        Self { round, levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level recorded for the pair `a`–`b`, whichever direction won.
    pub fn level_between(&self, a: NodeId, b: NodeId) -> Option<&PheromoneLevel> {
        self.levels.iter().find(|l| l.edge.connects(a, b))
    }

    /// Highest pheromone in the snapshot.
    pub fn max_level(&self) -> Option<f64> {
        self.levels.iter().map(|l| l.pheromone).reduce(f64::max)
    }

    /// Every level scaled by the snapshot maximum into `0.0..=1.0`.
    pub fn intensities(&self) -> Vec<(Edge, f64)> {
        match self.max_level() {
            Some(max) if max > 0.0 => self
                .levels
                .iter()
                .map(|l| (l.edge, l.pheromone / max))
                .collect(),
            _ => Vec::new(),
        }
    }
}
