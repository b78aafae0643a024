//! Error types for LAPSE

use thiserror::Error;

/// Core LAPSE errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LapseError {
    #[error("Invalid state: cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

/// Result type for LAPSE operations
pub type LapseResult<T> = Result<T, LapseError>;
