//! Concrete command handlers for the gator CLI

use crate::registry::CommandRegistry;

pub mod config;
pub mod login;

pub use config::ConfigCommand;
pub use login::LoginCommand;

/// Registry with every built-in command bound to its name.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(login::NAME, LoginCommand);
    registry.register(config::NAME, ConfigCommand);
    registry
}
