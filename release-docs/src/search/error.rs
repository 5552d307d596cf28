//! Search error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching search results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The endpoint answered with a non-success status, could not be reached,
    /// or did not answer in time.
    #[error("Search request for page {page} failed: {message}")]
    TransportFailure { page: u32, message: String },

    /// The response body did not have the expected shape.
    #[error("Search response for page {page} was malformed: {message}")]
    MalformedResponse { page: u32, message: String },
}

impl SearchError {
    /// A request for `page` that did not complete within `timeout`.
    pub(crate) fn timed_out(page: u32, timeout: Duration) -> Self {
        Self::TransportFailure {
            page,
            message: format!("timed out after {}s", timeout.as_secs_f64()),
        }
    }

    /// Classifies a GitHub client error raised while fetching `page`.
    ///
    /// The client's own `Display` output carries a backtrace, so only the
    /// underlying cause is reported.
    pub(crate) fn from_octocrab(page: u32, error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::TransportFailure {
                page,
                message: format!("HTTP {}: {}", source.status_code, source.message),
            },
            octocrab::Error::Json { source, .. } => Self::MalformedResponse {
                page,
                message: source.to_string(),
            },
            octocrab::Error::Serde { source, .. } => Self::MalformedResponse {
                page,
                message: source.to_string(),
            },
            other => Self::TransportFailure {
                page,
                message: describe_causes(&other),
            },
        }
    }
}

/// Joins the messages of `error`'s cause chain, falling back to the first line
/// of its own message when it has no cause.
fn describe_causes(error: &(dyn std::error::Error + 'static)) -> String {
    let mut messages = Vec::new();
    let mut cause = error.source();
    while let Some(current) = cause {
        messages.push(current.to_string());
        cause = current.source();
    }

    if messages.is_empty() {
        let own = error.to_string();
        return own.lines().next().unwrap_or_default().to_string();
    }
    messages.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("Service\n\nFound at 0: backtrace frame")]
    struct Outer {
        #[source]
        source: std::io::Error,
    }

    #[test]
    fn timeout_is_a_transport_failure() {
        let error = SearchError::timed_out(3, Duration::from_secs(30));

        assert!(matches!(
            error,
            SearchError::TransportFailure { page: 3, .. }
        ));
        assert_eq!(
            error.to_string(),
            "Search request for page 3 failed: timed out after 30s"
        );
    }

    #[test]
    fn describes_cause_chain_without_own_message() {
        let error = Outer {
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        };

        assert_eq!(describe_causes(&error), "connection refused");
    }

    #[test]
    fn falls_back_to_first_line_without_causes() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe\ntrailing detail");

        assert_eq!(describe_causes(&error), "broken pipe");
    }
}
