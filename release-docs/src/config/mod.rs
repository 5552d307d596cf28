//! Configuration loading.
//!
//! Settings are read from an optional `release-docs.toml`. Every key has a
//! default, so a missing file is equivalent to an empty one:
//!
//! ```toml
//! [changelog]
//! repository = "Javacord/Javacord"
//! milestone = "Next Version"
//! bot-login = "allcontributors[bot]"
//! output = "CHANGELOG.md"
//!
//! [readme]
//! template = "README.md.hbs"
//! output = "README.md"
//! checksum = "README.md.sha256"
//!
//! [readme.dependencies]
//! log4j_version = "org.apache.logging.log4j:log4j-api"
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ChangelogSettings, ReadmeSettings};

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Default config file name, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "release-docs.toml";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Changelog generation settings.
    pub changelog: ChangelogSettings,

    /// README generation settings.
    pub readme: ReadmeSettings,
}

impl Config {
    /// Loads and validates the config file at `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates config file contents; `path` is used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not valid TOML or fails
    /// validation.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Validates settings that deserialization alone cannot check.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |key: &'static str, message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            key,
            message,
        };
        let changelog = &self.changelog;

        let is_owner_and_name = matches!(
            changelog.repository.split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        );
        if !is_owner_and_name {
            return Err(invalid(
                "changelog.repository",
                format!("expected 'owner/name', got '{}'", changelog.repository),
            ));
        }

        if changelog.milestone.trim().is_empty() {
            return Err(invalid(
                "changelog.milestone",
                "must not be empty".to_string(),
            ));
        }

        if changelog.bot_login.trim().is_empty() {
            return Err(invalid(
                "changelog.bot-login",
                "must not be empty".to_string(),
            ));
        }

        if let Err(e) = Url::parse(&changelog.api_base_url) {
            return Err(invalid(
                "changelog.api-base-url",
                format!("'{}' is not a valid URL: {e}", changelog.api_base_url),
            ));
        }

        if changelog.timeout_secs == 0 {
            return Err(invalid(
                "changelog.timeout-secs",
                "must be greater than zero".to_string(),
            ));
        }

        if self.readme.output == self.readme.checksum {
            return Err(invalid(
                "readme.checksum",
                "must differ from readme.output".to_string(),
            ));
        }

        Ok(())
    }
}
