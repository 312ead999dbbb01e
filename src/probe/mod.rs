//! Import probes for required Python modules.
//!
//! pyPEG2 is required at install time but not vendored — its PyPI tarball
//! was historically broken for setuptools, so the user installs it manually.
//! The probe attempts the import with the located interpreter and turns the
//! outcome into a structured status with remediation steps, rather than a
//! raw import traceback.
//!
//! # Architecture
//!
//! - [`checker`] - Dependency table and the import probe itself
//! - [`status`] - Probe outcome types

pub mod checker;
pub mod status;

pub use checker::{probe_import, Dependency, PYPEG2, REQUIRED_DEPENDENCIES};
pub use status::DependencyStatus;
