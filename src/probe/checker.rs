//! Dependency table and the import probe.

use crate::error::Result;
use crate::probe::status::DependencyStatus;
use crate::process::{self, RunOptions};
use std::path::Path;

/// A Python module dependency required at install time.
#[derive(Debug, Clone, Copy)]
pub struct Dependency {
    /// Display name used in diagnostics (e.g. "pyPEG2").
    pub name: &'static str,
    /// Import name probed with the interpreter (e.g. "pypeg2").
    pub module: &'static str,
    /// Manual installation steps shown when the module is missing.
    pub remediation: &'static [&'static str],
}

/// The pyPEG2 parsing-expression-grammar library.
pub const PYPEG2: Dependency = Dependency {
    name: "pyPEG2",
    module: "pypeg2",
    remediation: &["sudo pip3 install pyPEG2"],
};

/// Dependencies checked before any packaging action.
pub const REQUIRED_DEPENDENCIES: &[Dependency] = &[PYPEG2];

/// Attempt to import a dependency with the given interpreter.
///
/// A non-zero exit whose stderr mentions an import error maps to
/// [`DependencyStatus::Missing`]; any other non-zero exit is a probe
/// failure, not a missing module.
pub fn probe_import(interpreter: &Path, dependency: &Dependency) -> Result<DependencyStatus> {
    let code = format!("import {}", dependency.module);
    let result = process::run(interpreter, &["-c", &code], &RunOptions::captured())?;

    if result.success {
        tracing::debug!("{} importable via {}", dependency.module, interpreter.display());
        return Ok(DependencyStatus::Satisfied);
    }

    // ModuleNotFoundError subclasses ImportError; Python 2 only has the latter.
    if result.stderr.contains("ImportError") || result.stderr.contains("ModuleNotFoundError") {
        tracing::debug!("{} not importable: {}", dependency.module, result.stderr.trim());
        return Ok(DependencyStatus::Missing {
            remediation: dependency.remediation.iter().map(|s| s.to_string()).collect(),
        });
    }

    Ok(DependencyStatus::ProbeFailed {
        message: if result.stderr.trim().is_empty() {
            format!("import probe exited with code {:?}", result.exit_code)
        } else {
            result.stderr.trim().to_string()
        },
    })
}
