//! Portfolio projects, from GitHub repositories to display-ready entries.
//!
//! The pipeline runs in this order: fetch, filter, sort, normalize, truncate.

pub mod build_portfolio;
pub mod fetch_candidate_repositories;
pub mod filter_repositories;
pub mod normalize_repository;
pub mod sort_repositories;

pub use build_portfolio::BuildPortfolioInterface;
#[cfg(any(test, feature = "testkit"))]
pub use build_portfolio::MockBuildPortfolioInterface;
pub use fetch_candidate_repositories::FetchCandidateRepositoriesInterface;
#[cfg(any(test, feature = "testkit"))]
pub use fetch_candidate_repositories::MockFetchCandidateRepositoriesInterface;
pub use filter_repositories::RepositoryFilter;
pub use normalize_repository::normalize_repository;
pub use sort_repositories::sort_by_most_recent;
