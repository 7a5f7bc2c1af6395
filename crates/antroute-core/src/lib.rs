//! # AntRoute Core
//!
//! Core types for the ant-colony route search.
//!
//! This crate holds everything a search needs that does not depend on
//! randomness or on how rounds are scheduled:
//!
//! - **types** - node identities and symmetric, cost-carrying edges
//! - **graph** - the dense adjacency index holding pheromone and desirability
//! - **choice** - the injectable draw source and the cumulative choice table
//! - **path** - node paths and the path-to-edge translator
//! - **snapshot** - per-round pheromone views for replay and animation
//! - **topology** - connectivity helpers over the raw edge list
//!
//! ## Quick Start
//!
//! ```rust
//! use antroute_core::prelude::*;
//!
//! let edges = Edge::from_triples(&[(1, 2, 5), (2, 3, 4)]).unwrap();
//! let graph = GraphIndex::build(&edges);
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.pheromone(NodeId(1), NodeId(2)), INITIAL_PHEROMONE);
//! ```

pub mod choice;
pub mod error;
pub mod graph;
pub mod path;
pub mod snapshot;
pub mod topology;
pub mod types;
pub mod prelude;
