//! GitHub issue search backed by octocrab.

use super::{RawSearchPage, SearchClient, SearchError, SearchQuery, PAGE_SIZE};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Query parameters for `GET /search/issues`.
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
    page: u32,
}

/// Searches merged pull requests through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubSearchClient {
    octocrab: Octocrab,
    timeout: Duration,
}

impl GitHubSearchClient {
    /// Wraps an already configured client; every request is bounded by `timeout`.
    pub fn new(octocrab: Octocrab, timeout: Duration) -> Self {
        Self { octocrab, timeout }
    }

    /// Builds a client for `base_url`, authenticated with `token` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected or the client cannot be
    /// built.
    pub fn build(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().base_uri(base_url)?;
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        Ok(Self::new(builder.build()?, timeout))
    }
}

#[async_trait]
impl SearchClient for GitHubSearchClient {
    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<RawSearchPage, SearchError> {
        let q = query.to_query_string();
        let params = SearchParams {
            q: &q,
            sort: "created",
            order: "asc",
            per_page: PAGE_SIZE,
            page,
        };
        debug!(page, q = %q, "Requesting search page");

        let request = self
            .octocrab
            .get::<RawSearchPage, _, _>("/search/issues", Some(&params));

        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| SearchError::timed_out(page, self.timeout))?
            .map_err(|e| SearchError::from_octocrab(page, e))
    }
}
