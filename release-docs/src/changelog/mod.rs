//! Changelog aggregation.
//!
//! Pull request bodies follow a small text convention: a `## Changelog` line
//! followed by bullet points, and optionally a `### Breaking Changes` line
//! followed by bullet points. This module turns search results into
//! [`PullRequestRecord`]s and renders them as a [`ChangelogDocument`].

mod extract;
mod record;
mod render;

pub use extract::{extract_bullets, trim_indent, BREAKING_CHANGES_HEADER, CHANGELOG_HEADER};
pub use record::{build_records, PullRequestRecord};
pub use render::{ChangeKind, ChangelogDocument};
