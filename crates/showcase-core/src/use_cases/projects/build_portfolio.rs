use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use showcase_models::{AccountName, PortfolioEntry};
use tracing::{error, info};

use super::{
    normalize_repository, sort_by_most_recent, FetchCandidateRepositoriesInterface,
    RepositoryFilter,
};
use crate::CoreContext;

/// Builds the project list of an account, newest first.
///
/// Never fails: when the account repositories cannot be fetched, the
/// portfolio is empty.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildPortfolioInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, account: &AccountName) -> Vec<PortfolioEntry>;
}

#[derive(Component)]
#[shaku(interface = BuildPortfolioInterface)]
pub(crate) struct BuildPortfolio;

#[async_trait]
impl BuildPortfolioInterface for BuildPortfolio {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, account: &AccountName) -> Vec<PortfolioEntry> {
        let fetch_candidate_repositories: &dyn FetchCandidateRepositoriesInterface =
            ctx.core_module.resolve_ref();

        let candidates = match fetch_candidate_repositories.run(ctx, account).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!(
                    account = %account,
                    error = %e,
                    message = "Could not fetch repositories, portfolio will be empty"
                );
                return vec![];
            }
        };

        let config = &ctx.config.portfolio;
        let filtered = RepositoryFilter::from_config(config).apply(candidates);
        let sorted = sort_by_most_recent(filtered);
        let mut entries: Vec<_> = sorted
            .into_iter()
            .map(|repository| normalize_repository(repository, &config.fallback_description))
            .collect();
        entries.truncate(config.max_entries);

        info!(
            account = %account,
            count = entries.len(),
            message = "Portfolio built"
        );

        entries
    }
}
