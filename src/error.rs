//! Error types for the crew hours reporting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while validating report
//! parameters, fetching time entries, and aggregating hours.

use thiserror::Error;

/// The main error type for the reporting engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently from the store up to the HTTP layer.
///
/// # Example
///
/// ```
/// use crew_hours::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "date".to_string(),
///     message: "expected YYYY-MM-DD".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid parameter 'date': expected YYYY-MM-DD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A report parameter was missing or malformed.
    #[error("Invalid parameter '{field}': {message}")]
    Validation {
        /// The query parameter that failed validation.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A closed time entry does not end after it starts.
    #[error("Time entry '{entry_id}' is inconsistent: {message}")]
    DataIntegrity {
        /// The ID of the offending entry.
        entry_id: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// The storage collaborator failed to answer a query.
    #[error("Time entry store error: {message}")]
    Upstream {
        /// The error reported by the store.
        message: String,
    },

    /// No time entry exists with the given ID.
    #[error("Time entry not found: {entry_id}")]
    EntryNotFound {
        /// The ID that was looked up.
        entry_id: String,
    },

    /// A clock-in or clock-out conflicts with the entry's current state.
    #[error("Time entry conflict: {message}")]
    EntryConflict {
        /// A description of the conflict.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a [`EngineError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
