//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::packaging::PackagingAction;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pytsdl-setup - Installation bootstrap for the pytsdl package.
#[derive(Debug, Parser)]
#[command(name = "pytsdl-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the Python interpreter to use (overrides PYTSDL_PYTHON and PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the environment and register pytsdl with setuptools
    /// (default if no command specified)
    Install(InstallArgs),

    /// Run the environment precondition checks and report status
    Check(CheckArgs),

    /// Show the package metadata record
    Metadata(MetadataArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Packaging command to forward to setuptools
    #[arg(long, value_enum, default_value_t = PackagingAction::Install)]
    pub action: PackagingAction,

    /// Validate and show the registration without invoking setuptools
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for InstallArgs {
    fn default() -> Self {
        Self {
            action: PackagingAction::Install,
            dry_run: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `metadata` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MetadataArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_subcommand() {
        let cli = Cli::try_parse_from(["pytsdl-setup"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.python.is_none());
    }

    #[test]
    fn install_action_defaults_to_install() {
        let cli = Cli::try_parse_from(["pytsdl-setup", "install"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.action, PackagingAction::Install);
                assert!(!args.dry_run);
            }
            other => panic!("expected install, got {:?}", other),
        }
    }

    #[test]
    fn install_accepts_sdist_action() {
        let cli =
            Cli::try_parse_from(["pytsdl-setup", "install", "--action", "sdist"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => assert_eq!(args.action, PackagingAction::Sdist),
            other => panic!("expected install, got {:?}", other),
        }
    }

    #[test]
    fn python_flag_is_global() {
        let cli =
            Cli::try_parse_from(["pytsdl-setup", "check", "--python", "/opt/python3"]).unwrap();
        assert_eq!(cli.python, Some(PathBuf::from("/opt/python3")));
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(Cli::try_parse_from(["pytsdl-setup", "install", "--action", "upload"]).is_err());
    }
}
