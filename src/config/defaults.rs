//! Default config document and missing-file policy.

use super::Config;

/// Database URL written into a freshly created config file.
pub const DEFAULT_DB_URL: &str = "postgres://example";

/// What `ConfigStore::read_config` does when the file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Write the default document, then read it back.
    #[default]
    Create,
    /// Fail with `GatorError::ConfigMissing`.
    Fail,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            current_user_name: None,
        }
    }
}
