//! CLI command implementations.

pub mod components;
pub mod init;
pub mod search;
