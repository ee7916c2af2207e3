//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during roster conversion.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/nicknames.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/nicknames.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
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

    /// A time range did not match the expected "HH:MM-HH:MM" form.
    ///
    /// Raised only by the time-range parser; the classifier and duration
    /// calculator absorb it into sentinel values rather than propagating.
    #[error("Malformed time range: '{text}'")]
    MalformedTimeRange {
        /// The text that failed to parse.
        text: String,
    },

    /// The uploaded workbook does not contain the expected worksheet.
    #[error("Worksheet not found: {name}")]
    WorksheetNotFound {
        /// The worksheet name that was looked up.
        name: String,
    },

    /// The source worksheet does not have the expected fixed layout.
    #[error("Unexpected sheet layout: {message}")]
    SheetLayout {
        /// A description of the structural problem.
        message: String,
    },

    /// The source workbook could not be opened or read.
    #[error("Failed to read workbook: {message}")]
    SpreadsheetRead {
        /// A description of the read failure.
        message: String,
    },

    /// The output workbook could not be produced.
    #[error("Failed to write workbook: {message}")]
    SpreadsheetWrite {
        /// A description of the write failure.
        message: String,
    },

    /// A staged output file could not be written or read back.
    #[error("File staging error: {message}")]
    Staging {
        /// A description of the staging failure.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
