//! Change classification and markdown rendering.

use super::record::PullRequestRecord;
use std::fmt::{self, Write};

const TITLE: &str = "# \u{1F4CB} Changelog";
const IMPROVEMENTS_HEADER: &str = "### Improvements";
const BUGFIXES_HEADER: &str = "### Bugfixes";
const BREAKING_CHANGES_HEADER: &str = "### Breaking Changes";
const UNCLASSIFIED_HEADER: &str = "UNKNOWN PR INFORMATION:";

/// Prefix (compared case-insensitively) marking a change as a bugfix.
const BUGFIX_PREFIX: &str = "Fixed";

/// Kind of a regular changelog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Improvement,
    Bugfix,
}

impl ChangeKind {
    /// Classifies a changelog entry by its leading word.
    #[must_use]
    pub fn of(change: &str) -> Self {
        let mut chars = change.chars();
        let is_fix = BUGFIX_PREFIX
            .chars()
            .all(|expected| chars.next().is_some_and(|c| chars_match_ignore_case(c, expected)));
        if is_fix {
            Self::Bugfix
        } else {
            Self::Improvement
        }
    }
}

/// Compares two characters ignoring case, including non-ASCII case mappings
/// such as the dotless `ı` against `i`.
fn chars_match_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

/// A changelog grouped into its rendered sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    improvements: Vec<String>,
    bugfixes: Vec<String>,
    breaking_changes: Vec<String>,
    unclassified: Vec<String>,
}

impl ChangelogDocument {
    /// Sorts every entry of `records` into its section, keeping input order.
    #[must_use]
    pub fn from_records(records: &[PullRequestRecord]) -> Self {
        let mut document = Self::default();

        for record in records {
            for change in &record.changes {
                let line = entry_line(change, record);
                match ChangeKind::of(change) {
                    ChangeKind::Bugfix => document.bugfixes.push(line),
                    ChangeKind::Improvement => document.improvements.push(line),
                }
            }
        }

        for record in records {
            document.breaking_changes.extend(
                record
                    .breaking_changes
                    .iter()
                    .map(|change| entry_line(change, record)),
            );
        }

        document.unclassified = records
            .iter()
            .filter(|record| record.is_unclassified())
            .map(|record| format!("- {}", record.link))
            .collect();

        document
    }

    /// Rendered improvement lines.
    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    /// Rendered bugfix lines.
    pub fn bugfixes(&self) -> &[String] {
        &self.bugfixes
    }

    /// Rendered breaking change lines.
    pub fn breaking_changes(&self) -> &[String] {
        &self.breaking_changes
    }

    /// Rendered links of pull requests without changelog entries.
    pub fn unclassified(&self) -> &[String] {
        &self.unclassified
    }

    /// Renders the markdown document.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChangelogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;

        let sections = [
            (IMPROVEMENTS_HEADER, &self.improvements),
            (BUGFIXES_HEADER, &self.bugfixes),
            (BREAKING_CHANGES_HEADER, &self.breaking_changes),
            (UNCLASSIFIED_HEADER, &self.unclassified),
        ];

        for (header, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            f.write_char('\n')?;
            writeln!(f, "{header}")?;
            for line in lines {
                writeln!(f, "{line}")?;
            }
        }

        Ok(())
    }
}

/// Formats `- <change> (<link>) by @<author>`.
fn entry_line(change: &str, record: &PullRequestRecord) -> String {
    format!(
        "- {change} ({}) by @{}",
        record.link, record.author_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: &str, author: &str, changes: &[&str], breaking: &[&str]) -> PullRequestRecord {
        PullRequestRecord {
            link: link.to_string(),
            author_name: author.to_string(),
            changes: changes.iter().map(|s| s.to_string()).collect(),
            breaking_changes: breaking.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn classifies_fixed_prefix_case_insensitively() {
        assert_eq!(ChangeKind::of("Fixed a crash on startup"), ChangeKind::Bugfix);
        assert_eq!(ChangeKind::of("fixed typo"), ChangeKind::Bugfix);
        assert_eq!(ChangeKind::of("FIXED everything"), ChangeKind::Bugfix);
        assert_eq!(ChangeKind::of("Added a new endpoint"), ChangeKind::Improvement);
        assert_eq!(ChangeKind::of("Fix"), ChangeKind::Improvement);
        assert_eq!(ChangeKind::of(""), ChangeKind::Improvement);
    }

    #[test]
    fn non_ascii_entries_do_not_panic() {
        assert_eq!(ChangeKind::of("Für"), ChangeKind::Improvement);
        assert_eq!(ChangeKind::of("\u{1F41B}\u{1F41B}"), ChangeKind::Improvement);
    }

    #[test]
    fn prefix_match_folds_unicode_case() {
        assert_eq!(ChangeKind::of("F\u{131}xed a crash"), ChangeKind::Bugfix);
        assert_eq!(ChangeKind::of("Fixe\u{301}d"), ChangeKind::Improvement);
    }

    #[test]
    fn renders_all_sections_in_order() {
        let records = vec![
            record("https://x/1", "alice", &["Added X", "Fixed Y"], &[]),
            record("https://x/2", "bob", &["Improved Z"], &["Removed W"]),
            record("https://x/3", "carol", &[], &[]),
        ];

        let rendered = ChangelogDocument::from_records(&records).render();

        assert_eq!(
            rendered,
            "# \u{1F4CB} Changelog\n\
             \n\
             ### Improvements\n\
             - Added X (https://x/1) by @alice\n\
             - Improved Z (https://x/2) by @bob\n\
             \n\
             ### Bugfixes\n\
             - Fixed Y (https://x/1) by @alice\n\
             \n\
             ### Breaking Changes\n\
             - Removed W (https://x/2) by @bob\n\
             \n\
             UNKNOWN PR INFORMATION:\n\
             - https://x/3\n"
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let records = vec![record("https://x/1", "alice", &["Added X"], &[])];

        let rendered = ChangelogDocument::from_records(&records).render();

        assert_eq!(
            rendered,
            "# \u{1F4CB} Changelog\n\n### Improvements\n- Added X (https://x/1) by @alice\n"
        );
        assert!(!rendered.contains(BUGFIXES_HEADER));
        assert!(!rendered.contains(UNCLASSIFIED_HEADER));
    }

    #[test]
    fn no_records_renders_title_only() {
        assert_eq!(
            ChangelogDocument::from_records(&[]).render(),
            "# \u{1F4CB} Changelog\n"
        );
    }

    #[test]
    fn unclassified_record_only_listed_as_unknown() {
        let records = vec![record("https://x/9", "dave", &[], &[])];

        let document = ChangelogDocument::from_records(&records);

        assert!(document.improvements().is_empty());
        assert!(document.bugfixes().is_empty());
        assert!(document.breaking_changes().is_empty());
        assert_eq!(document.unclassified(), ["- https://x/9"]);
    }

    #[test]
    fn breaking_only_record_is_not_unclassified() {
        let records = vec![record("https://x/4", "erin", &[], &["Dropped Java 8"])];

        let document = ChangelogDocument::from_records(&records);

        assert!(document.unclassified().is_empty());
        assert_eq!(
            document.breaking_changes(),
            ["- Dropped Java 8 (https://x/4) by @erin"]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![
            record("https://x/1", "alice", &["Added X", "fixed Y"], &["Renamed Z"]),
            record("https://x/2", "bob", &[], &[]),
        ];

        let first = ChangelogDocument::from_records(&records).render();
        let second = ChangelogDocument::from_records(&records).render();

        assert_eq!(first, second);
    }
}
