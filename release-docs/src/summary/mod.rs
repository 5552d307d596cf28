//! Run summary types and helpers.

mod changelog_summary;
mod readme_summary;

pub use changelog_summary::ChangelogSummary;
pub use readme_summary::ReadmeSummary;
