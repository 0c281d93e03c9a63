//! # Gator
//!
//! Gator is a small command-line tool that keeps a per-user JSON
//! configuration file (`~/.gatorconfig.json`) and dispatches subcommands
//! through a name-keyed registry.
//!
//! ## Modules
//!
//! - [`config`] - Loading, validating and persisting the config file
//! - [`registry`] - The `Command` trait and name-to-handler dispatch
//! - [`commands`] - Concrete handlers (`login`, `config`)
//! - [`output`] - User-facing output with an injectable writer
//! - [`error`] - Error kinds surfaced by the CLI
//!
//! ## Example
//!
//! ```no_run
//! use gator::config::{ConfigStore, MissingPolicy};
//!
//! let store = ConfigStore::new("/tmp/.gatorconfig.json", MissingPolicy::Create);
//! store.set_user("alice").expect("Failed to set user");
//!
//! let config = store.read_config().expect("Failed to read config");
//! assert_eq!(config.current_user_name.as_deref(), Some("alice"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod registry;

pub use error::{GatorError, Result};

/// Default path constants for the gator config file.
pub mod paths {
    /// File name of the config file, relative to the home directory.
    pub const CONFIG_FILE_NAME: &str = ".gatorconfig.json";
}
