//! A single ant's walk.
//!
//! An ant leaves `start`, never revisits a node, and at every step picks
//! among the open trails with probability proportional to their desire.
//! It either reaches the destination or gets stuck; a stuck ant leaves no
//! pheromone behind. Since nodes are never revisited a walk is at most
//! `V - 1` steps long.

use crate::config::ColonyConfig;
use antroute_core::choice::{ChoiceTable, DrawSource};
use antroute_core::graph::{GraphIndex, Trail};
use antroute_core::path::Path;
use antroute_core::types::NodeId;

/// A completed walk from start to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct AntTrail {
    path: Path,
    distance: f64,
}

impl AntTrail {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sum of trail distances (`1 / desirability`) along the path.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Pheromone this ant lays on each trail it used:
    /// `(1 / distance)^rank_exponent`. `None` for a walk with no hops,
    /// which has nothing to deposit on.
    pub fn deposit(&self, rank_exponent: f64) -> Option<f64> {
        if self.path.hop_count() == 0 || !(self.distance > 0.0) {
            return None;
        }
        Some((1.0 / self.distance).powf(rank_exponent))
    }
}

/// How a walk ended.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkOutcome {
    /// The ant reached the destination.
    Arrived(AntTrail),
    /// The ant ran out of open trails at `at` after `steps` moves.
    DeadEnd { at: NodeId, steps: usize },
}

impl WalkOutcome {
    pub fn trail(&self) -> Option<&AntTrail> {
        match self {
            WalkOutcome::Arrived(trail) => Some(trail),
            WalkOutcome::DeadEnd { .. } => None,
        }
    }

    pub fn arrived(&self) -> bool {
        matches!(self, WalkOutcome::Arrived(_))
    }
}

/// Send one ant from `start` toward `destination`.
///
/// A start outside the graph is a dead end at once, even when it equals
/// the destination. Otherwise a walk that starts on its destination
/// arrives immediately with a single-node path.
pub fn walk<D>(
    start: NodeId,
    destination: NodeId,
    graph: &GraphIndex,
    config: &ColonyConfig,
    draws: &mut D,
) -> WalkOutcome
where
    D: DrawSource + ?Sized,
{
    if !graph.contains(start) {
        return WalkOutcome::DeadEnd { at: start, steps: 0 };
    }
    let mut path = Path::single(start);
    if start == destination {
        return WalkOutcome::Arrived(AntTrail {
            path,
            distance: 0.0,
        });
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[start.index()] = true;
    let mut distance = 0.0;
    let mut current = start;

    while current != destination {
        let open = graph
            .neighbors(current)
            .filter(|(node, _)| !visited[node.index()])
            .map(|(node, trail)| {
                (
                    node,
                    trail.desire(config.pheromone_exponent, config.distance_exponent),
                )
            });

        let next = ChoiceTable::from_desires(open).and_then(|table| table.sample(draws));
        let Some(next) = next else {
            return WalkOutcome::DeadEnd {
                at: current,
                steps: path.hop_count(),
            };
        };

        distance += graph.trail(current, next).map_or(0.0, Trail::distance);
        visited[next.index()] = true;
        path.push(next);
        current = next;
    }

    WalkOutcome::Arrived(AntTrail { path, distance })
}
