//! Error types for apkctl operations.
//!
//! This module defines [`ApkctlError`], the error type shared by both
//! binaries, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Components expose `bool` outcomes and report failures to the console
//! - `ApkctlError` carries the detail those reports are built from
//! - Nothing is retried; every error ends the current operation

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for apkctl operations.
#[derive(Debug, Error)]
pub enum ApkctlError {
    /// The build wrapper script is missing from the project root.
    #[error("Gradle wrapper not found: {path}")]
    WrapperNotFound { path: PathBuf },

    /// A process could not be started (not installed, not executable).
    #[error("Could not launch '{program}': {source}")]
    CommandLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A process ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The dispatch endpoint could not be built from the API base URL.
    #[error("Invalid API endpoint: {message}")]
    InvalidEndpoint { message: String },

    /// A required input was empty after prompting.
    #[error("{field} is required")]
    MissingInput { field: String },

    /// Transport-level HTTP failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for apkctl operations.
pub type Result<T> = std::result::Result<T, ApkctlError>;
