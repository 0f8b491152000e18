//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error`.

use thiserror::Error;

use crate::domain::usage::usage;

/// The two ways a dispatch can end without running the manager.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Wrong number of positional arguments.
    #[error("{}", usage(.program))]
    Usage { program: String },

    /// Interpreter resolution, profile activation, or the manager spawn failed.
    #[error(transparent)]
    FatalDelegation(#[from] anyhow::Error),
}

impl DispatchError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            DispatchError::Usage { .. } | DispatchError::FatalDelegation(_) => 1,
        }
    }
}

/// Errors reading the environment a profile produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile output entry {index} is not KEY=VALUE")]
    MalformedEntry { index: usize },

    #[error("profile output entry {index} is not valid UTF-8")]
    NotUtf8 { index: usize },

    #[error("profile produced no environment (did it call `exit`?)")]
    Empty,
}
