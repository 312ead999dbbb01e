//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] indicating success/failure and exit code.
    /// Precondition failures surface as `Err`; `main` prints their verbatim
    /// diagnostics.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    python: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher with an optional interpreter override.
    pub fn new(python: Option<PathBuf>) -> Self {
        Self { python }
    }

    /// Get the interpreter override, if any.
    pub fn python(&self) -> Option<&Path> {
        self.python.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// `install` is the default when no subcommand is given, mirroring the
    /// original `setup.py install` invocation.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(self.python.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.python.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Metadata(args)) => {
                let cmd = super::metadata::MetadataCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::install::InstallCommand::new(
                    self.python.clone(),
                    crate::cli::args::InstallArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_interpreter_override() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/opt/python3")));
        assert_eq!(dispatcher.python(), Some(Path::new("/opt/python3")));
    }
}
