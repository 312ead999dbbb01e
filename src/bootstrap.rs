//! Startup validation and install orchestration.
//!
//! The two precondition checks from the original `setup.py` (interpreter
//! major version, pyPEG2 importability) run as one explicit validation
//! function, called before any packaging action. Both failures are fatal
//! and unconditional; there is no partial-success mode.

use crate::error::{Result, SetupError};
use crate::interpreter::{locate_interpreter, query_version, RuntimeVersion};
use crate::metadata::PackageMetadata;
use crate::packaging::{Packager, PackagingAction};
use crate::probe::{probe_import, DependencyStatus, REQUIRED_DEPENDENCIES};
use std::path::{Path, PathBuf};

/// Minimum interpreter major version.
pub const REQUIRED_MAJOR: u32 = 3;

/// Proof that the environment preconditions hold.
///
/// Only produced by [`validate_environment`]; packaging requires one, so
/// the checks cannot be skipped.
#[derive(Debug, Clone)]
pub struct ValidatedEnvironment {
    /// The located interpreter.
    pub interpreter: PathBuf,
    /// Its reported version.
    pub version: RuntimeVersion,
}

/// Run the precondition checks in order, failing on the first violation.
///
/// 1. Locate an interpreter (`--python` override, `PYTSDL_PYTHON`, PATH).
/// 2. Query its version; major < 3 is fatal.
/// 3. Probe each required module import; a missing module is fatal.
pub fn validate_environment(python_override: Option<&Path>) -> Result<ValidatedEnvironment> {
    let interpreter = locate_interpreter(python_override)?;
    let version = query_version(&interpreter)?;

    if !version.meets_major(REQUIRED_MAJOR) {
        return Err(SetupError::UnsupportedRuntime {
            required: REQUIRED_MAJOR,
            found: version,
        });
    }

    for dependency in REQUIRED_DEPENDENCIES {
        match probe_import(&interpreter, dependency)? {
            DependencyStatus::Satisfied => {}
            DependencyStatus::Missing { remediation } => {
                return Err(SetupError::MissingDependency {
                    name: dependency.name.to_string(),
                    remediation,
                });
            }
            DependencyStatus::ProbeFailed { message } => {
                return Err(SetupError::ProbeFailed {
                    path: interpreter.clone(),
                    message,
                });
            }
        }
    }

    tracing::debug!(
        "environment validated: {} ({})",
        interpreter.display(),
        version
    );
    Ok(ValidatedEnvironment {
        interpreter,
        version,
    })
}

/// Hand the metadata record to the packager, exactly once.
pub fn run_packaging(
    _env: &ValidatedEnvironment,
    metadata: &PackageMetadata,
    action: PackagingAction,
    packager: &mut dyn Packager,
) -> Result<()> {
    packager.register(metadata, action)
}
