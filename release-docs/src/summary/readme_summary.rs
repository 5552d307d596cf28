//! README run summary.

use std::path::PathBuf;

/// Outcome of a README verification or regeneration.
#[derive(Debug, Clone)]
pub struct ReadmeSummary {
    /// The guarded README.
    pub output: PathBuf,

    /// Digest of the README after the run.
    pub digest: String,

    /// Whether the README was regenerated (as opposed to only verified).
    pub regenerated: bool,

    /// Dependency placeholders that had no matching dependency.
    pub unresolved_placeholders: Vec<String>,
}
