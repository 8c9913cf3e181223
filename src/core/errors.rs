/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::SimTime;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Submission result
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Numeric fields of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitField {
    Arrival,
    Burst,
}

impl std::fmt::Display for SubmitField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrival => f.write_str("arrival time"),
            Self::Burst => f.write_str("burst"),
        }
    }
}

/// Reasons a process is rejected at the submission boundary
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SubmitError {
    #[error("Process name cannot be empty")]
    #[diagnostic(
        code(submit::empty_name),
        help("Give the process a label such as `P1`.")
    )]
    EmptyName,

    #[error("Invalid {field}: '{value}' is not a non-negative integer")]
    #[diagnostic(
        code(submit::invalid_number),
        help("Arrival and burst are whole simulated seconds.")
    )]
    InvalidNumber { field: SubmitField, value: String },

    #[error("Burst must be greater than zero")]
    #[diagnostic(
        code(submit::zero_burst),
        help("A process needs at least one second of CPU time.")
    )]
    ZeroBurst,

    #[error("Value {value} for {field} exceeds the maximum of {max} simulated seconds")]
    #[diagnostic(
        code(submit::too_large),
        help("Keep arrival and burst within the simulated time range.")
    )]
    TooLarge {
        field: SubmitField,
        value: SimTime,
        max: SimTime,
    },

    #[error("Arrival {arrival} is earlier than the last submitted arrival {last}")]
    #[diagnostic(
        code(submit::out_of_order),
        help("Submit processes in non-decreasing arrival order.")
    )]
    OutOfOrder { arrival: SimTime, last: SimTime },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulationError {
    #[error("Submission rejected: {0}")]
    #[diagnostic(transparent)]
    Submit(#[from] SubmitError),

    #[error("Simulation task is no longer running")]
    #[diagnostic(
        code(simulation::task_closed),
        help("The runtime task was shut down before the command was delivered.")
    )]
    TaskClosed,

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(simulation::serialization))]
    Serialization(String),

    #[error("Invalid command: {0}")]
    #[diagnostic(
        code(simulation::invalid_command),
        help("Type `help` to list the available commands.")
    )]
    InvalidCommand(String),
}
