//! Simulator error types

use thiserror::Error;

/// Errors raised when an identifier does not resolve to a preset row.
///
/// Current callers only hand over identifiers drawn from the fixed key
/// enums, so these paths guard future preset-table edits rather than
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    #[error("unknown scenario identifier: {0}")]
    UnknownScenario(String),

    #[error("unknown space profile identifier: {0}")]
    UnknownSpace(String),

    #[error("unknown plan identifier: {0}")]
    UnknownPlan(String),
}
