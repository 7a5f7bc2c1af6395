//! # AntRoute Runtime
//!
//! Colony rounds, ant walks and best-path extraction.
//!
//! The runtime is the "colony": it owns the graph index for one search,
//! sends ants out round after round, folds their deposits back into the
//! trails and records a snapshot after every update. When the rounds are
//! over, a deterministic greedy walk reads the best route off the trails.

pub mod ant;
pub mod colony;
pub mod config;
pub mod extract;
pub mod ledger;
pub mod rng;
pub mod search;
pub mod stats;
pub mod prelude;
