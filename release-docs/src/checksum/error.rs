//! Checksum guard error types.

use thiserror::Error;

/// Explains what a digest mismatch means for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftHint {
    /// The artifact was changed by hand since it was last generated.
    ManualEdit,
    /// A regeneration was requested, but the artifact had already drifted.
    RegenerationBlocked,
}

impl DriftHint {
    /// Returns the operator-facing advice for this hint.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::ManualEdit => {
                "this file was edited by hand; edit the template instead and regenerate it"
            }
            Self::RegenerationBlocked => {
                "the stored digest is stale, so regeneration was blocked; \
                 move the manual edits into the template and restore the generated file"
            }
        }
    }
}

/// Errors that can occur while verifying or persisting a digest.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The tracked artifact no longer matches its stored digest.
    #[error("'{artifact}' does not match its recorded digest (expected {expected}, found {actual}): {}", .hint.advice())]
    DriftDetected {
        artifact: String,
        expected: String,
        actual: String,
        hint: DriftHint,
    },

    /// Failed to read or write the artifact or its digest file.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
