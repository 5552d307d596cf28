//! Search response shapes.

use serde::Deserialize;

/// One page of results from the issue search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchPage {
    /// Total number of matches reported by the endpoint.
    pub total_count: u64,

    /// Items on this page.
    pub items: Vec<RawPullRequest>,
}

/// A pull request as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequest {
    /// Web URL of the pull request.
    pub html_url: String,

    /// Author of the pull request.
    pub user: RawUser,

    /// Markdown body, absent when the description was left empty.
    #[serde(default)]
    pub body: Option<String>,
}

/// The author of a search item.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    /// Login name.
    pub login: String,
}
