//! Orchestrates changelog generation and README synchronization.

mod config;
mod error;

pub use config::{ReadmeUpdateRequest, RunnerConfig};
pub use error::RunnerError;

use crate::changelog::{build_records, ChangelogDocument};
use crate::checksum::{ChecksumGuard, DriftHint};
use crate::readme::{SubstitutionMap, TemplateMaterializer};
use crate::search::{fetch_all, GitHubSearchClient, SearchClient, SearchQuery};
use crate::summary::{ChangelogSummary, ReadmeSummary};
use tracing::{info, warn};

/// Runs the tool's actions for one project.
pub struct Runner {
    config: RunnerConfig,
    materializer: TemplateMaterializer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            materializer: TemplateMaterializer::new(),
        }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Generates the changelog using the GitHub search API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the client cannot be built, any search page
    /// fails, or the changelog cannot be written.
    pub async fn generate_changelog(
        &self,
    ) -> Result<(ChangelogDocument, ChangelogSummary), RunnerError> {
        let settings = &self.config.settings().changelog;
        let client = GitHubSearchClient::build(
            &settings.api_base_url,
            self.config.token(),
            self.config.search_timeout(),
        )?;
        if self.config.token().is_none() {
            warn!("No GitHub token provided, search requests are unauthenticated");
        }

        self.generate_changelog_with(&client).await
    }

    /// Generates the changelog from the results of `client`.
    ///
    /// The file is written only after every search page was fetched.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if any search page fails or the changelog cannot
    /// be written.
    pub async fn generate_changelog_with<C>(
        &self,
        client: &C,
    ) -> Result<(ChangelogDocument, ChangelogSummary), RunnerError>
    where
        C: SearchClient + ?Sized,
    {
        let settings = &self.config.settings().changelog;
        let query = SearchQuery::new(&settings.repository, &settings.milestone);

        let items = fetch_all(client, &query).await?;
        let records = build_records(&items, &settings.bot_login);
        let document = ChangelogDocument::from_records(&records);

        let output = self.config.changelog_path();
        crate::fs::write_atomic(&output, &document.render()).map_err(|source| {
            RunnerError::Output {
                path: output.display().to_string(),
                source,
            }
        })?;

        let summary = ChangelogSummary::new(
            output,
            items.len(),
            items.len() - records.len(),
            &document,
        );
        info!(
            path = %summary.output.display(),
            entries = summary.total_entries(),
            unclassified = summary.unclassified,
            "Changelog written"
        );
        if summary.has_unclassified() {
            warn!(
                count = summary.unclassified,
                "Some pull requests have no changelog section"
            );
        }

        Ok((document, summary))
    }

    /// Checks that the README still matches its recorded digest.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Checksum`] if the README was edited by hand or
    /// either file is missing.
    pub fn verify_readme(&self) -> Result<ReadmeSummary, RunnerError> {
        let guard = self.readme_guard();
        let digest = guard.verify(DriftHint::ManualEdit)?;

        info!(path = %guard.artifact_path().display(), "README matches its digest");
        Ok(ReadmeSummary {
            output: guard.artifact_path().to_path_buf(),
            digest,
            regenerated: false,
            unresolved_placeholders: Vec::new(),
        })
    }

    /// Regenerates the README from its template and records the new digest.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Readme`] if the README drifted from its digest, a
    /// placeholder has no value, or a file cannot be accessed.
    pub fn update_readme(
        &self,
        request: &ReadmeUpdateRequest,
    ) -> Result<ReadmeSummary, RunnerError> {
        let guard = self.readme_guard();
        let (substitutions, unresolved) = self.substitutions(request);

        let digest = self.materializer.materialize(
            &self.config.readme_template_path(),
            &guard,
            &substitutions,
        )?;

        Ok(Self::readme_summary(&guard, digest, unresolved))
    }

    /// Generates the README and its digest for the first time.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Readme`] if the README or its digest file already
    /// exists, a placeholder has no value, or a file cannot be accessed.
    pub fn init_readme(
        &self,
        request: &ReadmeUpdateRequest,
    ) -> Result<ReadmeSummary, RunnerError> {
        let guard = self.readme_guard();
        let (substitutions, unresolved) = self.substitutions(request);

        let digest = self.materializer.initialize(
            &self.config.readme_template_path(),
            &guard,
            &substitutions,
        )?;

        Ok(Self::readme_summary(&guard, digest, unresolved))
    }

    /// Builds the substitution map, returning the placeholders left unresolved.
    fn substitutions(&self, request: &ReadmeUpdateRequest) -> (SubstitutionMap, Vec<String>) {
        let mut substitutions = SubstitutionMap::new(request.version.as_str());
        let unresolved = substitutions.resolve_dependencies(
            &self.config.settings().readme.dependencies,
            &request.dependencies,
        );
        for placeholder in &unresolved {
            warn!(placeholder = %placeholder, "No resolved dependency for placeholder");
        }
        (substitutions, unresolved)
    }

    fn readme_summary(
        guard: &ChecksumGuard,
        digest: String,
        unresolved_placeholders: Vec<String>,
    ) -> ReadmeSummary {
        ReadmeSummary {
            output: guard.artifact_path().to_path_buf(),
            digest,
            regenerated: true,
            unresolved_placeholders,
        }
    }

    fn readme_guard(&self) -> ChecksumGuard {
        ChecksumGuard::new(
            self.config.readme_path(),
            self.config.readme_checksum_path(),
        )
    }
}
