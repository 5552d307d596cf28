//! Runner configuration.

use crate::config::{Config, ConfigError};
use crate::readme::ResolvedDependency;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for running the tool against one project.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Project root that relative paths resolve against.
    root: PathBuf,
    /// Settings loaded from the config file.
    settings: Config,
    /// GitHub token used for search requests.
    token: Option<String>,
}

impl RunnerConfig {
    /// Creates a configuration from already loaded settings.
    pub fn new(root: PathBuf, settings: Config) -> Self {
        Self {
            root,
            settings,
            token: None,
        }
    }

    /// Loads settings from `config_path`, resolved against `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file exists but is invalid.
    pub fn load(root: PathBuf, config_path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::load(&root.join(config_path))?;
        Ok(Self::new(root, settings))
    }

    /// Sets the GitHub token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Config {
        &self.settings
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the per-request search timeout.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.changelog.timeout_secs)
    }

    /// Returns the changelog output path.
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.settings.changelog.output)
    }

    /// Returns the README template path.
    pub fn readme_template_path(&self) -> PathBuf {
        self.root.join(&self.settings.readme.template)
    }

    /// Returns the generated README path.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.settings.readme.output)
    }

    /// Returns the README digest path.
    pub fn readme_checksum_path(&self) -> PathBuf {
        self.root.join(&self.settings.readme.checksum)
    }
}

/// Inputs supplied by the build for a README generation.
#[derive(Debug, Clone)]
pub struct ReadmeUpdateRequest {
    /// Current project version.
    pub version: String,

    /// Resolved runtime dependencies.
    pub dependencies: Vec<ResolvedDependency>,
}
