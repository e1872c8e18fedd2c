//! Error types for the charpick plugin.
//!
//! This module defines the crate-wide error type [`CharpickError`], the fetch
//! failure type [`FetchFailure`], and a [`Result`] alias. All errors are
//! implemented using the `thiserror` crate.

use thiserror::Error;

/// User-visible message for every failed character lookup.
///
/// The distinction between status, transport and decode failures is kept in
/// [`FetchFailure`] for the trace log only; the screen always shows this text.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

/// A failed character lookup.
///
/// Raised when the outbound request returns a non-success status, when the
/// host reports a transport failure, or when the response body cannot be
/// decoded. All variants are surfaced identically to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The catalog answered with a non-2xx status.
    #[error("catalog returned status {0}")]
    Status(u16),

    /// The host could not complete the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a character page.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchFailure {
    /// The message shown inline under the search bar.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

/// The main error type for charpick operations.
///
/// # Examples
///
/// ```
/// use charpick::domain::{CharpickError, FetchFailure};
///
/// let err: CharpickError = FetchFailure::Status(500).into();
/// assert_eq!(err.to_string(), "Fetch error: catalog returned status 500");
/// ```
#[derive(Debug, Error)]
pub enum CharpickError {
    /// A character lookup failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchFailure),

    /// Filesystem or I/O operation failed.
    ///
    /// Occurs when the log directory cannot be created.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for charpick operations.
pub type Result<T> = std::result::Result<T, CharpickError>;
