//! Error types for AntRoute operations.
//!
//! A search never fails with an error: an unreachable destination, an
//! out-of-range endpoint and an empty graph all surface as an absent path.
//! Errors only exist at construction boundaries, where malformed edges or
//! configuration would otherwise poison every later computation.

use thiserror::Error;

/// Result type for AntRoute operations.
pub type Result<T> = std::result::Result<T, AntRouteError>;

/// Errors that can occur while constructing AntRoute inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AntRouteError {
    /// Edge-related errors.
    #[error("Edge error: {0}")]
    Edge(#[from] EdgeError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Edge-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeError {
    /// Cost must be at least 1; desirability is its reciprocal.
    #[error("Edge {node_a} - {node_b} has zero cost (must be at least 1)")]
    ZeroCost { node_a: u16, node_b: u16 },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl AntRouteError {
    pub fn zero_cost(node_a: u16, node_b: u16) -> Self {
        AntRouteError::Edge(EdgeError::ZeroCost { node_a, node_b })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AntRouteError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        AntRouteError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
