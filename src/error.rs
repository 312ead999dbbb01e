//! Error types for pytsdl-setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SetupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - Precondition failures with an exact stderr contract expose it through
//!   [`SetupError::diagnostic`]; `main` prints that text verbatim

use std::path::PathBuf;
use thiserror::Error;

use crate::interpreter::RuntimeVersion;

/// Core error type for pytsdl-setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The located interpreter's major version is below the required one.
    #[error("unsupported interpreter version {found} (need Python {required}+)")]
    UnsupportedRuntime {
        required: u32,
        found: RuntimeVersion,
    },

    /// A required Python module cannot be imported; the user resolves it
    /// manually outside the tool.
    #[error("missing dependency '{name}'")]
    MissingDependency {
        name: String,
        remediation: Vec<String>,
    },

    /// No Python interpreter could be located.
    #[error("no Python interpreter found (tried: {searched:?})")]
    InterpreterNotFound { searched: Vec<String> },

    /// The interpreter was found but a probe could not be evaluated.
    #[error("failed to probe interpreter at {path}: {message}")]
    ProbeFailed { path: PathBuf, message: String },

    /// The interpreter reported a version string we could not parse.
    #[error("could not parse interpreter version from {output:?}")]
    VersionParse { output: String },

    /// The delegated packaging step exited with a failure.
    #[error("packaging command failed with exit code {code:?}")]
    PackagingFailed { code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Exact stderr text for precondition failures.
    ///
    /// The two precondition checks carry a verbatim diagnostic contract
    /// inherited from the original `setup.py`; callers print the returned
    /// text as-is, without an `Error:` prefix. Returns `None` for errors
    /// without such a contract.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            SetupError::UnsupportedRuntime { required, .. } => {
                Some(format!("Sorry, pytsdl needs Python {}\n", required))
            }
            SetupError::MissingDependency { name, remediation } => {
                let mut text = format!("Please install {} manually:\n\n", name);
                for step in remediation {
                    text.push_str(&format!("    {}\n", step));
                }
                Some(text)
            }
            _ => None,
        }
    }
}

/// Result type alias for pytsdl-setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
