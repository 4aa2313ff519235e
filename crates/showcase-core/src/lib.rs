//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::projects::{
    build_portfolio::BuildPortfolio, fetch_candidate_repositories::FetchCandidateRepositories,
};

module! {
    pub CoreModule {
        components = [
            BuildPortfolio, FetchCandidateRepositories
        ],
        providers = []
    }
}
