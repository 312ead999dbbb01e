//! Production packager driving `setuptools.setup()`.
//!
//! The packager renders the metadata record into a `setup()` call and runs
//! it with the located interpreter (`python -c <driver> <command>`), which
//! is exactly what the original `setup.py` did after its precondition
//! checks. setuptools' own failure modes (missing package directory, write
//! permissions, ...) surface as its exit code.

use crate::error::{Result, SetupError};
use crate::metadata::PackageMetadata;
use crate::packaging::{Packager, PackagingAction};
use crate::process::{self, RunOptions};
use std::path::{Path, PathBuf};

/// Packager that delegates to setuptools via the located interpreter.
pub struct SetuptoolsPackager {
    interpreter: PathBuf,
}

impl SetuptoolsPackager {
    /// Create a packager bound to an interpreter.
    pub fn new(interpreter: &Path) -> Self {
        Self {
            interpreter: interpreter.to_path_buf(),
        }
    }

    /// Render the Python driver source for a metadata record.
    pub fn render_driver(metadata: &PackageMetadata) -> String {
        let packages = metadata
            .packages
            .iter()
            .map(|p| py_str(p))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "from setuptools import setup\n\
             setup(name={name},\n      \
             version={version},\n      \
             description={description},\n      \
             author={author},\n      \
             author_email={author_email},\n      \
             url={url},\n      \
             packages=[{packages}])\n",
            name = py_str(&metadata.name),
            version = py_str(&metadata.version),
            description = py_str(&metadata.description),
            author = py_str(&metadata.author),
            author_email = py_str(&metadata.author_email),
            url = py_str(&metadata.url),
            packages = packages,
        )
    }
}

impl Packager for SetuptoolsPackager {
    fn register(&mut self, metadata: &PackageMetadata, action: PackagingAction) -> Result<()> {
        let driver = Self::render_driver(metadata);
        tracing::debug!(
            "delegating '{}' for {} to {}",
            action,
            metadata.name,
            self.interpreter.display()
        );

        // setuptools output streams through to the user.
        let result = process::run(
            &self.interpreter,
            &["-c", &driver, action.as_str()],
            &RunOptions::inherited(),
        )?;

        if !result.success {
            return Err(SetupError::PackagingFailed {
                code: result.exit_code,
            });
        }
        Ok(())
    }
}

/// Quote a string as a Python single-quoted literal.
fn py_str(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}
