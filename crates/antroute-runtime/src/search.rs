//! One-call shortest-route search.

use crate::colony::Colony;
use crate::config::ColonyConfig;
use crate::stats::{ColonyStats, RoundStats};
use antroute_core::choice::DrawSource;
use antroute_core::error::Result;
use antroute_core::path::{to_edges, Path};
use antroute_core::snapshot::Snapshot;
use antroute_core::types::{Edge, NodeId};
use serde::Serialize;
use tracing::info;

/// Everything a search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Best node path, if the extractor found one.
    pub path: Option<Path>,
    /// The path as directed edges; `None` exactly when `path` is.
    pub route: Option<Vec<Edge>>,
    /// Trail state before the first round and after each round.
    pub snapshots: Vec<Snapshot>,
    pub stats: ColonyStats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Total cost of the route.
    pub fn route_cost(&self) -> Option<u32> {
        self.route
            .as_ref()
            .map(|edges| edges.iter().map(|e| u32::from(e.cost())).sum())
    }

    /// Whether the route uses `edge`, in either direction.
    pub fn route_contains(&self, edge: &Edge) -> bool {
        self.route
            .as_ref()
            .is_some_and(|edges| edges.iter().any(|e| e == edge))
    }
}

/// Run a full colony search from `start` to `destination` over `edges`.
///
/// Fails only on an invalid `config`. Unreachable or unknown endpoints are
/// not errors: the search still runs every round and reports no route.
pub fn search<D>(
    start: NodeId,
    destination: NodeId,
    edges: &[Edge],
    config: ColonyConfig,
    draws: &mut D,
) -> Result<SearchOutcome>
where
    D: DrawSource + ?Sized,
{
    search_with(start, destination, edges, config, draws, |_| {})
}

/// Like [`search`], calling `on_round` after each round.
pub fn search_with<D, F>(
    start: NodeId,
    destination: NodeId,
    edges: &[Edge],
    config: ColonyConfig,
    draws: &mut D,
    on_round: F,
) -> Result<SearchOutcome>
where
    D: DrawSource + ?Sized,
    F: FnMut(&RoundStats),
{
    let mut colony = Colony::from_config(edges, config)?;
    let snapshots = colony.run_with(start, destination, draws, on_round);
    let path = colony.best_path(start, destination);
    let route = to_edges(path.as_ref(), colony.graph());
    let outcome = SearchOutcome {
        path,
        route,
        snapshots,
        stats: colony.stats(),
    };

    info!(
        start = start.0,
        destination = destination.0,
        rounds = outcome.stats.rounds,
        found = outcome.found(),
        cost = ?outcome.route_cost(),
        "search complete"
    );

    Ok(outcome)
}
