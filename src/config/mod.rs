//! Configuration management for gator.
//!
//! The config is a single JSON object stored at `~/.gatorconfig.json`:
//!
//! ```json
//! { "db_url": "postgres://example", "current_user_name": null }
//! ```
//!
//! Every read parses and validates the whole file; every write replaces it.

use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GatorError, Result};
use crate::paths::CONFIG_FILE_NAME;

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

/// The persisted settings object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub db_url: String,
    /// `None` is written as `null`.
    pub current_user_name: Option<String>,
}

/// Reads and writes one config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    missing: MissingPolicy,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>, missing: MissingPolicy) -> Self {
        Self {
            path: path.into(),
            missing,
        }
    }

    /// Store backed by `<home>/.gatorconfig.json`.
    pub fn from_home(missing: MissingPolicy) -> Result<Self> {
        let home = dirs::home_dir().ok_or(GatorError::NoHomeDir)?;
        Ok(Self::new(home.join(CONFIG_FILE_NAME), missing))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    /// Load, parse and validate the config file.
    ///
    /// A missing file is created with [`Config::default`] first unless the
    /// store's policy is [`MissingPolicy::Fail`].
    pub fn read_config(&self) -> Result<Config> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => match self.missing {
                MissingPolicy::Create => {
                    info!(path = %self.path.display(), "Creating default config file");
                    self.write_config(&Config::default())?;
                    fs::read_to_string(&self.path).map_err(|e| GatorError::io(&self.path, e))?
                }
                MissingPolicy::Fail => {
                    return Err(GatorError::ConfigMissing {
                        path: self.path.clone(),
                    })
                }
            },
            Err(e) => return Err(GatorError::io(&self.path, e)),
        };
        debug!(path = %self.path.display(), bytes = content.len(), "Read config file");

        self.parse(&content)
    }

    /// Parse and validate config content as if it had been read from this
    /// store's path.
    pub fn parse(&self, content: &str) -> Result<Config> {
        let raw: serde_json::Value =
            serde_json::from_str(content).map_err(|source| GatorError::ConfigParse {
                path: self.path.clone(),
                source,
            })?;

        validate_config(&raw)
    }

    /// Overwrite the config file with `config`.
    ///
    /// The serialized document is validated before anything touches disk.
    pub fn write_config(&self, config: &Config) -> Result<()> {
        let document = serde_json::to_value(config)?;
        validate_config(&document)?;

        let mut content = serde_json::to_string_pretty(&document)?;
        content.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GatorError::io(parent, e))?;
        }
        fs::write(&self.path, content).map_err(|e| GatorError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "Wrote config file");

        Ok(())
    }

    /// Record `name` as the current user, keeping every other field.
    ///
    /// This is a plain read-modify-write: a crash between the read and the
    /// write loses the update, and two concurrent invocations can overwrite
    /// each other. Nothing locks the file.
    pub fn set_user(&self, name: &str) -> Result<Config> {
        let mut config = self.read_config()?;
        config.current_user_name = Some(name.to_string());
        self.write_config(&config)?;
        info!(user = name, "Current user updated");

        Ok(config)
    }
}
