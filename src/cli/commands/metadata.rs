//! Metadata command implementation.
//!
//! The `wheelcfg metadata` command prints the package metadata handed to the
//! packaging tool. The README is read eagerly; failing to read it fails the
//! command.

use crate::cli::args::MetadataArgs;
use crate::error::{Result, WheelError};
use crate::metadata::PackageMetadata;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The metadata command implementation.
pub struct MetadataCommand {
    ctx: CommandContext,
    args: MetadataArgs,
}

impl MetadataCommand {
    /// Create a new metadata command.
    pub fn new(ctx: CommandContext, args: MetadataArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for MetadataCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let readme = self.ctx.settings.readme_path(&self.ctx.project_root);
        let metadata = PackageMetadata::load(&readme)?;

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&metadata).map_err(|e| WheelError::Other(e.into()))?
        } else {
            serde_yaml::to_string(&metadata).map_err(|e| WheelError::Other(e.into()))?
        };
        ui.message(rendered.trim_end());

        Ok(CommandResult::success())
    }
}
