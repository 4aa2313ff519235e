//! API crate.
//!
//! Contains functions to communicate with GitHub API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod cache;
mod errors;
mod github;

pub use cache::CachedApiService;
pub use errors::GitHubError;
pub use github::GithubApiService;
