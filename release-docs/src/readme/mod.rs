//! Checksum-gated README generation.
//!
//! The README is expanded from a template. Its digest is stored next to it,
//! and regeneration is refused when the README was edited since the digest was
//! recorded, so manual edits are never silently overwritten.

mod error;
mod renderer;
mod substitutions;

pub use error::{CoordinateError, ReadmeError};
pub use renderer::{create_handlebars_registry, TemplateRenderer};
pub use substitutions::{
    find_dependency_version, DependencyCoordinate, ResolvedDependency, SubstitutionMap,
    VERSION_PLACEHOLDER,
};

use crate::checksum::{ChecksumGuard, DriftHint};
use std::path::Path;
use tracing::{info, info_span};

/// Regenerates a guarded artifact from a template.
pub struct TemplateMaterializer {
    renderer: TemplateRenderer,
}

impl Default for TemplateMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateMaterializer {
    /// Creates a materializer with a strict, non-escaping renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
        }
    }

    /// Expands `template_path` into the artifact tracked by `guard`.
    ///
    /// The artifact must match its stored digest. The expansion is written
    /// only after every placeholder resolved, and the new digest is recorded
    /// afterwards.
    ///
    /// # Returns
    ///
    /// The digest of the generated artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ReadmeError::Checksum`] if the artifact drifted or either file
    /// is missing, [`ReadmeError::MissingSubstitution`] if a placeholder has no
    /// value, or [`ReadmeError::Io`] if a file cannot be read or written.
    pub fn materialize(
        &self,
        template_path: &Path,
        guard: &ChecksumGuard,
        substitutions: &SubstitutionMap,
    ) -> Result<String, ReadmeError> {
        let _span = info_span!(
            "materialize",
            template = %template_path.display(),
            output = %guard.artifact_path().display()
        )
        .entered();

        guard.verify(DriftHint::RegenerationBlocked)?;
        self.generate(template_path, guard, substitutions)
    }

    /// Generates the artifact tracked by `guard` for the first time.
    ///
    /// Neither the artifact nor its digest file may exist yet; once they do,
    /// only [`materialize`](Self::materialize) can update them.
    ///
    /// # Errors
    ///
    /// Returns [`ReadmeError::AlreadyInitialized`] if either file exists, and
    /// otherwise the same errors as [`materialize`](Self::materialize).
    pub fn initialize(
        &self,
        template_path: &Path,
        guard: &ChecksumGuard,
        substitutions: &SubstitutionMap,
    ) -> Result<String, ReadmeError> {
        let _span = info_span!(
            "initialize",
            template = %template_path.display(),
            output = %guard.artifact_path().display()
        )
        .entered();

        for existing in [guard.artifact_path(), guard.digest_path()] {
            if existing.exists() {
                return Err(ReadmeError::AlreadyInitialized {
                    path: existing.display().to_string(),
                });
            }
        }

        info!("Generating file for the first time");
        self.generate(template_path, guard, substitutions)
    }

    fn generate(
        &self,
        template_path: &Path,
        guard: &ChecksumGuard,
        substitutions: &SubstitutionMap,
    ) -> Result<String, ReadmeError> {
        let template =
            std::fs::read_to_string(template_path).map_err(|source| ReadmeError::Io {
                path: template_path.display().to_string(),
                source,
            })?;

        let rendered = self.renderer.render(
            &template_path.display().to_string(),
            &template,
            substitutions,
        )?;

        crate::fs::write_atomic(guard.artifact_path(), &rendered).map_err(|source| {
            ReadmeError::Io {
                path: guard.artifact_path().display().to_string(),
                source,
            }
        })?;

        let digest = guard.persist()?;
        info!(digest = %digest, "Regenerated file from template");
        Ok(digest)
    }
}
