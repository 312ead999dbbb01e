//! Packager trait and setuptools delegation.
//!
//! The packaging subsystem is an external collaborator: it consumes the
//! metadata record and produces the installable distribution. This module
//! only models the handoff. The trait seam allows tests to verify the
//! record is forwarded intact without running setuptools.
//!
//! # Architecture
//!
//! - [`setuptools`] - Production packager driving `setuptools.setup()`
//! - [`mock`] - Recording packager for tests

pub mod mock;
pub mod setuptools;

pub use mock::RecordingPackager;
pub use setuptools::SetuptoolsPackager;

use crate::error::Result;
use crate::metadata::PackageMetadata;
use serde::{Deserialize, Serialize};

/// Distutils command forwarded to the packaging subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackagingAction {
    /// Install the package into the active environment.
    Install,
    /// Build the package in place.
    Build,
    /// Produce a source distribution.
    Sdist,
}

impl PackagingAction {
    /// The distutils command name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingAction::Install => "install",
            PackagingAction::Build => "build",
            PackagingAction::Sdist => "sdist",
        }
    }
}

impl std::fmt::Display for PackagingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The packaging subsystem seam.
pub trait Packager {
    /// Hand the metadata record to the packaging subsystem.
    ///
    /// Called at most once per run, and only after every precondition
    /// check has passed.
    fn register(&mut self, metadata: &PackageMetadata, action: PackagingAction) -> Result<()>;
}
