//! Settings sections of `release-docs.toml`.

use crate::readme::DependencyCoordinate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings for `generate-changelog`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChangelogSettings {
    /// Repository to search, in "owner/name" format.
    pub repository: String,

    /// Milestone whose merged pull requests are collected.
    pub milestone: String,

    /// Author login whose pull requests are left out of the changelog.
    pub bot_login: String,

    /// Output file, relative to the project root.
    pub output: PathBuf,

    /// Base URL of the GitHub REST API.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChangelogSettings {
    fn default() -> Self {
        Self {
            repository: "Javacord/Javacord".to_string(),
            milestone: "Next Version".to_string(),
            bot_login: "allcontributors[bot]".to_string(),
            output: PathBuf::from("CHANGELOG.md"),
            api_base_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Settings for `verify-readme` and `update-readme`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReadmeSettings {
    /// Handlebars template the README is generated from.
    pub template: PathBuf,

    /// Generated README.
    pub output: PathBuf,

    /// File holding the digest of the generated README.
    pub checksum: PathBuf,

    /// Placeholder name to the dependency whose version fills it.
    pub dependencies: BTreeMap<String, DependencyCoordinate>,
}

impl Default for ReadmeSettings {
    fn default() -> Self {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(
            "log4j_version".to_string(),
            DependencyCoordinate {
                group: "org.apache.logging.log4j".to_string(),
                name: "log4j-api".to_string(),
            },
        );

        Self {
            template: PathBuf::from("README.md.hbs"),
            output: PathBuf::from("README.md"),
            checksum: PathBuf::from("README.md.sha256"),
            dependencies,
        }
    }
}
