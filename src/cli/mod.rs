//! Command-line interface for pytsdl-setup.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, CheckArgs, Commands, CompletionsArgs, InstallArgs, MetadataArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
