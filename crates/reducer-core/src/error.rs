//! Error types for reducer composition
//!
//! Errors only exist at construction time. A reduction itself never fails:
//! unrecognized actions and false predicates pass state through.

use thiserror::Error;

/// Misconfiguration detected while building a composite reducer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reserved action type {key:?} in dispatch table (likely an undefined action type constant)")]
    ReservedActionType { key: String },

    #[error("join requires at least 2 reducers, got {given}")]
    TooFewReducers { given: usize },
}

impl ConfigError {
    /// The dispatch table key at fault, if the error names one
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::ReservedActionType { key } => Some(key),
            ConfigError::TooFewReducers { .. } => None,
        }
    }
}

/// Result type for composite construction
pub type ConfigResult<T> = Result<T, ConfigError>;
