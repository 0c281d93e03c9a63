//! `gator login <username>` - record the current user in the config file.

use tracing::info;

use crate::error::{GatorError, Result};
use crate::registry::{Command, CommandContext};

pub const NAME: &str = "login";

/// Shown when the username is missing or blank.
pub const USAGE_ERROR: &str = "Login requires a username. Please try again.";

pub struct LoginCommand;

impl Command for LoginCommand {
    fn description(&self) -> &'static str {
        "Set the current user"
    }

    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()> {
        let username = ctx
            .arg(0)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| GatorError::MissingArgument(USAGE_ERROR.to_string()))?;

        ctx.store.set_user(username)?;
        info!(user = username, path = %ctx.store.path().display(), "Logged in");

        ctx.output.line(&format!("{} has been set", username))
    }
}
