//! AntRoute Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use antroute_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{Cost, Edge, NodeId};

// Re-export the graph index
pub use crate::graph::{AdjacencyRow, GraphIndex, Trail, INITIAL_PHEROMONE};

// Re-export choice primitives
pub use crate::choice::{ChoiceTable, DrawSource};

// Re-export paths and snapshots
pub use crate::path::{to_edges, Path};
pub use crate::snapshot::{PheromoneLevel, Snapshot};

// Re-export error types
pub use crate::error::{AntRouteError, ConfigError, EdgeError, Result};
