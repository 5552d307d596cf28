//! Changelog run summary.

use crate::changelog::ChangelogDocument;
use std::path::PathBuf;

/// Summary of a changelog generation run.
#[derive(Debug, Clone, Default)]
pub struct ChangelogSummary {
    /// Where the changelog was written.
    pub output: PathBuf,

    /// Number of merged pull requests returned by the search.
    pub pull_requests_found: usize,

    /// Number of pull requests skipped because a bot authored them.
    pub pull_requests_excluded: usize,

    /// Number of improvement entries.
    pub improvements: usize,

    /// Number of bugfix entries.
    pub bugfixes: usize,

    /// Number of breaking change entries.
    pub breaking_changes: usize,

    /// Number of pull requests without changelog entries.
    pub unclassified: usize,
}

impl ChangelogSummary {
    /// Creates a summary for `document`.
    #[must_use]
    pub fn new(
        output: PathBuf,
        pull_requests_found: usize,
        pull_requests_excluded: usize,
        document: &ChangelogDocument,
    ) -> Self {
        Self {
            output,
            pull_requests_found,
            pull_requests_excluded,
            improvements: document.improvements().len(),
            bugfixes: document.bugfixes().len(),
            breaking_changes: document.breaking_changes().len(),
            unclassified: document.unclassified().len(),
        }
    }

    /// Total number of rendered changelog entries.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.improvements + self.bugfixes + self.breaking_changes
    }

    /// Returns true if some pull requests need their description fixed.
    #[must_use]
    pub fn has_unclassified(&self) -> bool {
        self.unclassified > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::PullRequestRecord;

    #[test]
    fn counts_sections() {
        let records = vec![
            PullRequestRecord {
                link: "https://x/1".to_string(),
                author_name: "alice".to_string(),
                changes: vec!["Added X".to_string(), "Fixed Y".to_string()],
                breaking_changes: vec!["Removed Z".to_string()],
            },
            PullRequestRecord {
                link: "https://x/2".to_string(),
                author_name: "bob".to_string(),
                changes: Vec::new(),
                breaking_changes: Vec::new(),
            },
        ];
        let document = ChangelogDocument::from_records(&records);

        let summary = ChangelogSummary::new(PathBuf::from("CHANGELOG.md"), 3, 1, &document);

        assert_eq!(summary.improvements, 1);
        assert_eq!(summary.bugfixes, 1);
        assert_eq!(summary.breaking_changes, 1);
        assert_eq!(summary.total_entries(), 3);
        assert!(summary.has_unclassified());
    }
}
