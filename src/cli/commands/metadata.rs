//! Metadata command implementation.
//!
//! The `pytsdl-setup metadata` command shows the record that would be
//! forwarded to the packaging subsystem.

use crate::cli::args::MetadataArgs;
use crate::error::{Result, SetupError};
use crate::metadata::PackageMetadata;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The metadata command implementation.
pub struct MetadataCommand {
    args: MetadataArgs,
}

impl MetadataCommand {
    /// Create a new metadata command.
    pub fn new(args: MetadataArgs) -> Self {
        Self { args }
    }
}

impl Command for MetadataCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let record = PackageMetadata::pytsdl();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&record).map_err(|e| SetupError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(&format!("name:         {}", record.name));
            ui.message(&format!("version:      {}", record.version));
            ui.message(&format!("description:  {}", record.description));
            ui.message(&format!("author:       {}", record.author));
            ui.message(&format!("author_email: {}", record.author_email));
            ui.message(&format!("url:          {}", record.url));
            ui.message(&format!("packages:     {}", record.packages.join(", ")));
        }

        Ok(CommandResult::success())
    }
}
