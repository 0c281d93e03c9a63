//! `gator config [show|path]` - inspect the config file.

use crate::error::{GatorError, Result};
use crate::registry::{Command, CommandContext};

pub const NAME: &str = "config";

const USAGE: &str = "Usage: config [show|path]";

pub struct ConfigCommand;

impl Command for ConfigCommand {
    fn description(&self) -> &'static str {
        "Show the config file (config [show|path])"
    }

    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()> {
        match ctx.arg(0) {
            None | Some("show") => show(ctx),
            Some("path") => ctx.output.line(&ctx.store.path().display().to_string()),
            Some(other) => Err(GatorError::MissingArgument(format!(
                "Unknown config action '{}'. {}",
                other, USAGE
            ))),
        }
    }
}

fn show(ctx: &CommandContext<'_>) -> Result<()> {
    let config = ctx.store.read_config()?;

    ctx.output
        .line(&format!("path: {}", ctx.store.path().display()))?;
    ctx.output.line(&format!("db_url: {}", config.db_url))?;
    ctx.output.line(&format!(
        "current_user_name: {}",
        config.current_user_name.as_deref().unwrap_or("(none)")
    ))
}
