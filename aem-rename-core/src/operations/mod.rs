//! High-level operations that correspond to CLI commands
//!
//! These hold the business logic for a run, separated from CLI concerns like
//! argument parsing, exit codes and output formatting.

pub mod rename;

pub use rename::rename_operation;
