//! pytsdl-setup - Installation bootstrap for the pytsdl package.
//!
//! pytsdl-setup replaces the ad-hoc `setup.py` precondition checks with a
//! small CLI that gates installation on environment preconditions before
//! handing off to the packaging subsystem.
//!
//! # Modules
//!
//! - [`bootstrap`] - Startup validation and install orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`interpreter`] - Python interpreter location and version queries
//! - [`metadata`] - The static package metadata record
//! - [`packaging`] - Packager trait and setuptools delegation
//! - [`probe`] - Import probes for required Python modules
//! - [`process`] - Child process execution with captured output
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pytsdl_setup::metadata::PackageMetadata;
//!
//! let record = PackageMetadata::pytsdl();
//! assert_eq!(record.name, "pytsdl");
//! assert_eq!(record.packages, vec!["pytsdl"]);
//! ```
//!
//! For end-to-end validation against a real interpreter, see the
//! integration tests.

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod interpreter;
pub mod metadata;
pub mod packaging;
pub mod probe;
pub mod process;
pub mod ui;

pub use error::{Result, SetupError};
