//! Runner error types.

/// Errors that can occur while running one of the tool's actions.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Pull request search errors.
    #[error(transparent)]
    Search(#[from] crate::search::SearchError),

    /// README verification errors.
    #[error(transparent)]
    Checksum(#[from] crate::checksum::ChecksumError),

    /// README regeneration errors.
    #[error(transparent)]
    Readme(#[from] crate::readme::ReadmeError),

    /// Failed to write an output file.
    #[error("Failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
