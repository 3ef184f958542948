//! Error taxonomy for the calculator
//!
//! Errors are values that surface at the dispatch boundary as user-facing
//! messages. No variant is ever allowed to take down the read loop.

use thiserror::Error;

/// Error type for calculator operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("{command} expects {expected} argument(s), got {got}")]
    InvalidArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid number: {0}")]
    InvalidNumberFormat(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid exponent: {0}")]
    InvalidExponent(String),

    #[error("Cannot take the square root of a negative number")]
    NegativeRadicand,

    #[error("Operand is not finite: {0}")]
    NonFiniteOperand(f64),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Plugin '{name}' failed to load: {reason}")]
    PluginLoad { name: String, reason: String },
}

impl CalcError {
    /// Shorthand for the argument-count failure
    pub fn arg_count(command: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::InvalidArgumentCount {
            command: command.into(),
            expected,
            got,
        }
    }

    pub fn plugin_load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PluginLoad {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` for calculator operations
pub type CalcResult<T> = std::result::Result<T, CalcError>;
