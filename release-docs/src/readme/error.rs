//! README materialization error types.

use crate::checksum::ChecksumError;
use thiserror::Error;

/// Errors that can occur while regenerating a templated file.
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// The template references a placeholder with no value.
    #[error("Template '{template}' references '{placeholder}', which has no substitution value")]
    MissingSubstitution {
        template: String,
        placeholder: String,
    },

    /// Handlebars rejected the template.
    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: handlebars::RenderError,
    },

    /// First-time generation found an existing README or digest file.
    #[error("'{path}' already exists; first-time generation needs both the README and its digest file to be absent")]
    AlreadyInitialized { path: String },

    /// The generated file failed its digest check or the digest could not be stored.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    /// Failed to read the template or write the generated file.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A dependency coordinate could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid dependency coordinate '{value}': expected {expected}")]
pub struct CoordinateError {
    pub value: String,
    pub expected: &'static str,
}
