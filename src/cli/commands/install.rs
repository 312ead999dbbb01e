//! Install command implementation.
//!
//! The `pytsdl-setup install` command (also the default command) runs the
//! startup validation and then hands the metadata record to setuptools.

use std::path::PathBuf;

use crate::bootstrap::{run_packaging, validate_environment};
use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::metadata::PackageMetadata;
use crate::packaging::SetuptoolsPackager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    python: Option<PathBuf>,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(python: Option<PathBuf>, args: InstallArgs) -> Self {
        Self { python, args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = validate_environment(self.python.as_deref())?;
        ui.message(&format!(
            "Using Python {} at {}",
            env.version,
            env.interpreter.display()
        ));

        let metadata = PackageMetadata::pytsdl();

        if self.args.dry_run {
            ui.message(&format!(
                "dry-run mode: would run '{}' for {} {} without invoking setuptools",
                self.args.action, metadata.name, metadata.version
            ));
            ui.message("");
            ui.message(&SetuptoolsPackager::render_driver(&metadata));
            ui.success("Environment OK");
            return Ok(CommandResult::success());
        }

        let mut packager = SetuptoolsPackager::new(&env.interpreter);
        run_packaging(&env, &metadata, self.args.action, &mut packager)?;

        ui.success(&format!(
            "{} {} registered ({})",
            metadata.name, metadata.version, self.args.action
        ));
        Ok(CommandResult::success())
    }
}
