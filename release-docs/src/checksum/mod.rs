//! Drift detection for generated artifacts.
//!
//! Each guarded artifact has a sibling digest file. [`ChecksumGuard::verify`]
//! fails when the artifact was changed since the digest was recorded, and
//! [`ChecksumGuard::persist`] records the digest of freshly generated content.

mod error;

pub use error::{ChecksumError, DriftHint};

use crate::digest::compute_digest;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Links a tracked artifact to the file holding its digest.
#[derive(Debug, Clone)]
pub struct ChecksumGuard {
    artifact_path: PathBuf,
    digest_path: PathBuf,
}

impl ChecksumGuard {
    /// Creates a guard for `artifact_path` whose digest lives at `digest_path`.
    pub fn new(artifact_path: impl Into<PathBuf>, digest_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            digest_path: digest_path.into(),
        }
    }

    /// Returns the tracked artifact path.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Returns the digest file path.
    pub fn digest_path(&self) -> &Path {
        &self.digest_path
    }

    /// Checks the artifact against its stored digest.
    ///
    /// `hint` selects the advice attached to a [`ChecksumError::DriftDetected`].
    /// Returns the verified digest.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::DriftDetected`] on mismatch, or
    /// [`ChecksumError::Io`] if either file cannot be read.
    pub fn verify(&self, hint: DriftHint) -> Result<String, ChecksumError> {
        let stored = read_file(&self.digest_path)?;
        let expected = stored.trim();
        let actual = compute_digest(&read_file(&self.artifact_path)?);

        if expected != actual {
            return Err(ChecksumError::DriftDetected {
                artifact: self.artifact_path.display().to_string(),
                expected: expected.to_string(),
                actual,
                hint,
            });
        }

        debug!(artifact = %self.artifact_path.display(), digest = %actual, "Digest verified");
        Ok(actual)
    }

    /// Records the digest of the artifact's current content.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::Io`] if the artifact cannot be read or the
    /// digest file cannot be written.
    pub fn persist(&self) -> Result<String, ChecksumError> {
        let digest = compute_digest(&read_file(&self.artifact_path)?);

        crate::fs::write_atomic(&self.digest_path, &digest).map_err(|source| {
            ChecksumError::Io {
                path: self.digest_path.display().to_string(),
                source,
            }
        })?;

        info!(
            artifact = %self.artifact_path.display(),
            digest_file = %self.digest_path.display(),
            "Recorded new digest"
        );
        Ok(digest)
    }
}

fn read_file(path: &Path) -> Result<String, ChecksumError> {
    std::fs::read_to_string(path).map_err(|source| ChecksumError::Io {
        path: path.display().to_string(),
        source,
    })
}
