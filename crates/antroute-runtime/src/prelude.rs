//! AntRoute Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use antroute_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::Colony;
pub use crate::config::ColonyConfig;
pub use crate::stats::{ColonyStats, RoundStats};

// Re-export walking and extraction
pub use crate::ant::{walk, AntTrail, WalkOutcome};
pub use crate::extract::extract_best_path;
pub use crate::ledger::DepositLedger;

// Re-export draw sources
pub use crate::rng::{ScriptedDraws, SimRng};

// Re-export the one-call search
pub use crate::search::{search, search_with, SearchOutcome};

// Re-export from core
pub use antroute_core::prelude::*;
