//! Paginated retrieval of merged pull requests for a milestone.
//!
//! [`SearchClient`] fetches a single page; [`paginate`] turns it into a lazy
//! stream of items that stops once every reported match was fetched.

mod error;
mod github;
mod types;

pub use error::SearchError;
pub use github::GitHubSearchClient;
pub use types::{RawPullRequest, RawSearchPage, RawUser};

use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, info_span, Instrument};

/// Results requested per page.
pub const PAGE_SIZE: u8 = 100;

/// Selects the merged pull requests of one milestone in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Repository in "owner/name" format.
    pub repository: String,

    /// Milestone title.
    pub milestone: String,
}

impl SearchQuery {
    /// Creates a query for `milestone` in `repository`.
    pub fn new(repository: impl Into<String>, milestone: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            milestone: milestone.into(),
        }
    }

    /// Builds the search expression sent as the `q` parameter.
    ///
    /// Format: `type:pr repo:{repository} milestone:"{milestone}" is:merged`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "type:pr repo:{} milestone:\"{}\" is:merged",
            self.repository, self.milestone
        )
    }
}

/// Fetches one page of search results.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetches page `page` (1-based) of the results for `query`.
    async fn fetch_page(&self, query: &SearchQuery, page: u32)
        -> Result<RawSearchPage, SearchError>;
}

/// Returns whether another page should be requested after `page`.
///
/// Stops once `page * PAGE_SIZE` covers `total_count`, or when a page came back
/// empty.
fn has_more_pages(page: u32, total_count: u64, items_on_page: usize) -> bool {
    items_on_page > 0 && u64::from(page) * u64::from(PAGE_SIZE) < total_count
}

/// Streams every item matching `query`, requesting pages on demand.
///
/// Each call starts again from the first page. The stream ends with the first
/// error it encounters.
pub fn paginate<'a, C>(
    client: &'a C,
    query: &'a SearchQuery,
) -> impl Stream<Item = Result<RawPullRequest, SearchError>> + 'a
where
    C: SearchClient + ?Sized,
{
    stream::try_unfold(Some(1_u32), move |next| async move {
        let Some(page) = next else {
            return Ok(None);
        };

        let result = client.fetch_page(query, page).await?;
        debug!(
            page,
            items = result.items.len(),
            total_count = result.total_count,
            "Fetched search page"
        );

        let following =
            has_more_pages(page, result.total_count, result.items.len()).then_some(page + 1);
        Ok::<_, SearchError>(Some((result.items, following)))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, SearchError>)))
    .try_flatten()
}

/// Collects every item matching `query`.
///
/// # Errors
///
/// Returns the first [`SearchError`] raised by any page; no partial results are
/// returned.
pub async fn fetch_all<C>(
    client: &C,
    query: &SearchQuery,
) -> Result<Vec<RawPullRequest>, SearchError>
where
    C: SearchClient + ?Sized,
{
    let span = info_span!(
        "search",
        repository = %query.repository,
        milestone = %query.milestone
    );

    async {
        info!("Fetching merged pull requests");
        let items: Vec<RawPullRequest> = paginate(client, query).try_collect().await?;
        info!(count = items.len(), "Fetched merged pull requests");
        Ok(items)
    }
    .instrument(span)
    .await
}
