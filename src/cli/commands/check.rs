//! Check command implementation.
//!
//! The `pytsdl-setup check` command runs the precondition checks and reports
//! their status without touching the packaging subsystem. Unlike `install`,
//! a failed check produces a report and a non-zero exit instead of the
//! verbatim bootstrap diagnostic.

use std::path::PathBuf;

use serde::Serialize;

use crate::bootstrap::REQUIRED_MAJOR;
use crate::cli::args::CheckArgs;
use crate::error::{Result, SetupError};
use crate::interpreter::{locate_interpreter, query_version};
use crate::probe::{probe_import, DependencyStatus, REQUIRED_DEPENDENCIES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Machine-readable precondition report.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The located interpreter.
    pub interpreter: PathBuf,
    /// Its reported version.
    pub version: String,
    /// Whether the version passes the major gate.
    pub version_ok: bool,
    /// Per-dependency probe results.
    pub dependencies: Vec<DependencyReport>,
    /// Whether every check passed.
    pub ok: bool,
}

/// One dependency's probe result.
#[derive(Debug, Serialize)]
pub struct DependencyReport {
    pub name: String,
    pub module: String,
    pub satisfied: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remediation: Vec<String>,
}

/// The check command implementation.
pub struct CheckCommand {
    python: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(python: Option<PathBuf>, args: CheckArgs) -> Self {
        Self { python, args }
    }

    /// Run the checks and assemble the report.
    pub fn build_report(&self) -> Result<CheckReport> {
        let interpreter = locate_interpreter(self.python.as_deref())?;
        let version = query_version(&interpreter)?;
        let version_ok = version.meets_major(REQUIRED_MAJOR);

        let mut dependencies = Vec::new();
        for dependency in REQUIRED_DEPENDENCIES {
            let status = probe_import(&interpreter, dependency)?;
            dependencies.push(DependencyReport {
                name: dependency.name.to_string(),
                module: dependency.module.to_string(),
                satisfied: status.is_satisfied(),
                remediation: match status {
                    DependencyStatus::Missing { remediation } => remediation,
                    _ => Vec::new(),
                },
            });
        }

        let ok = version_ok && dependencies.iter().all(|d| d.satisfied);
        Ok(CheckReport {
            interpreter,
            version: version.to_string(),
            version_ok,
            dependencies,
            ok,
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.build_report()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| SetupError::Other(e.into()))?;
            ui.message(&json);
        } else {
            if report.version_ok {
                ui.success(&format!(
                    "Python {} at {}",
                    report.version,
                    report.interpreter.display()
                ));
            } else {
                ui.error(&format!(
                    "Python {} at {} (pytsdl needs Python {})",
                    report.version,
                    report.interpreter.display(),
                    REQUIRED_MAJOR
                ));
            }

            for dep in &report.dependencies {
                if dep.satisfied {
                    ui.success(&format!("{} importable", dep.name));
                } else {
                    ui.error(&format!("{} not importable", dep.name));
                    for step in &dep.remediation {
                        ui.warning(&format!("install manually: {}", step));
                    }
                }
            }
        }

        if report.ok {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
