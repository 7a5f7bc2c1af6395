//! # AntRoute
//!
//! Shortest-route search over weighted road maps with an ant colony.
//!
//! Ants leave the start town, pick each next road at random with a bias
//! toward cheap roads and strong pheromone, and reinforce the roads of every
//! successful walk in proportion to how short it was. Unused roads
//! evaporate. After the last round a deterministic greedy walk reads the best
//! route off the trails.
//!
//! ## Quick Start
//!
//! ```rust
//! use antroute::prelude::*;
//!
//! let roads = Edge::from_triples(&[(1, 2, 5), (1, 3, 2), (2, 4, 3), (3, 4, 6)]).unwrap();
//!
//! let outcome = search(
//!     NodeId(1),
//!     NodeId(4),
//!     &roads,
//!     ColonyConfig::default(),
//!     &mut SimRng::new(42),
//! )
//! .unwrap();
//!
//! // One snapshot before the first round, one after each round
//! assert_eq!(outcome.snapshots.len(), 11);
//!
//! if let Some(route) = &outcome.route {
//!     for road in route {
//!         println!("{road}");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`antroute_core`] - Edges, graph index, choice tables, paths, snapshots
//! - [`antroute_runtime`] - Colony rounds, ant walks, best-path extraction
//!
//! ## Key Concepts
//!
//! | Term | Meaning |
//! |------|---------|
//! | Desirability | `1 / cost`, fixed per road |
//! | Pheromone | Per-direction level, evaporates and gets reinforced |
//! | Desire | `pheromone^α × desirability^β`, drives every choice |
//! | Residue factor | Share of pheromone kept after each round |
//! | Snapshot | Dominant direction and level of every road after a round |
//!
//! ## Deterministic Runs
//!
//! Every random choice goes through a [`DrawSource`](prelude::DrawSource).
//! Seed a [`SimRng`](prelude::SimRng) to replay a search, or script the exact
//! draws with [`ScriptedDraws`](prelude::ScriptedDraws):
//!
//! ```rust
//! use antroute::prelude::*;
//!
//! let roads = Edge::from_triples(&[(1, 2, 1), (2, 3, 1)]).unwrap();
//! let mut colony = Colony::new(&roads);
//! colony.run(NodeId(1), NodeId(3), &mut ScriptedDraws::constant(0.5));
//!
//! let path = colony.best_path(NodeId(1), NodeId(3)).unwrap();
//! assert_eq!(path.nodes(), &[NodeId(1), NodeId(2), NodeId(3)]);
//! ```

// Re-export all subcrates
pub use antroute_core as core;
pub use antroute_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use antroute::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use antroute_core::types::{Cost, Edge, NodeId};
    pub use antroute_core::graph::{GraphIndex, Trail, INITIAL_PHEROMONE};
    pub use antroute_core::choice::{ChoiceTable, DrawSource};
    pub use antroute_core::path::{to_edges, Path};
    pub use antroute_core::snapshot::{PheromoneLevel, Snapshot};
    pub use antroute_core::topology::{are_connected, connected_components};

    // Error types
    pub use antroute_core::error::{AntRouteError, ConfigError, EdgeError, Result};

    // Runtime
    pub use antroute_runtime::colony::Colony;
    pub use antroute_runtime::config::ColonyConfig;
    pub use antroute_runtime::stats::{ColonyStats, RoundStats};
    pub use antroute_runtime::extract::extract_best_path;
    pub use antroute_runtime::rng::{ScriptedDraws, SimRng};
    pub use antroute_runtime::search::{search, search_with, SearchOutcome};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
