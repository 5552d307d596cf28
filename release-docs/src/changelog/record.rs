//! Structured pull request records.

use super::extract::{extract_bullets, trim_indent, BREAKING_CHANGES_HEADER, CHANGELOG_HEADER};
use crate::search::RawPullRequest;
use tracing::debug;

/// Changelog information extracted from one merged pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Web URL of the pull request.
    pub link: String,

    /// Login of the pull request author.
    pub author_name: String,

    /// Bullets listed under `## Changelog`.
    pub changes: Vec<String>,

    /// Bullets listed under `### Breaking Changes`.
    pub breaking_changes: Vec<String>,
}

impl PullRequestRecord {
    /// Parses the changelog sections out of a search item's body.
    #[must_use]
    pub fn from_raw(item: &RawPullRequest) -> Self {
        let lines = trim_indent(item.body.as_deref().unwrap_or_default());

        Self {
            link: item.html_url.clone(),
            author_name: item.user.login.clone(),
            changes: extract_bullets(&lines, CHANGELOG_HEADER),
            breaking_changes: extract_bullets(&lines, BREAKING_CHANGES_HEADER),
        }
    }

    /// Returns true if the body contained no changelog entries at all.
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.changes.is_empty() && self.breaking_changes.is_empty()
    }
}

/// Builds records for every item not authored by `bot_login`.
///
/// Input order is preserved.
#[must_use]
pub fn build_records(items: &[RawPullRequest], bot_login: &str) -> Vec<PullRequestRecord> {
    items
        .iter()
        .filter(|item| {
            let is_bot = item.user.login == bot_login;
            if is_bot {
                debug!(link = %item.html_url, author = %item.user.login, "Skipping bot pull request");
            }
            !is_bot
        })
        .map(PullRequestRecord::from_raw)
        .collect()
}
