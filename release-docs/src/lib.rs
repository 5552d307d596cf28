#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod changelog;
pub mod checksum;
pub mod config;
pub mod digest;
pub mod fs;
pub mod readme;
pub mod runner;
pub mod search;
pub mod summary;

pub use changelog::{
    build_records, extract_bullets, trim_indent, ChangeKind, ChangelogDocument, PullRequestRecord,
};
pub use checksum::{ChecksumError, ChecksumGuard, DriftHint};
pub use config::{ChangelogSettings, Config, ConfigError, ReadmeSettings, DEFAULT_CONFIG_FILE};
pub use digest::compute_digest;
pub use readme::{
    find_dependency_version, CoordinateError, DependencyCoordinate, ReadmeError,
    ResolvedDependency, SubstitutionMap, TemplateMaterializer,
};
pub use runner::{ReadmeUpdateRequest, Runner, RunnerConfig, RunnerError};
pub use search::{
    fetch_all, paginate, GitHubSearchClient, RawPullRequest, RawSearchPage, RawUser,
    SearchClient, SearchError, SearchQuery,
};
pub use summary::{ChangelogSummary, ReadmeSummary};
