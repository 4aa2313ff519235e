use async_trait::async_trait;
use shaku::{Component, Interface};
use showcase_ghapi_interface::types::GhRepository;
use showcase_models::AccountName;
use tracing::{error, info};

use crate::{CoreContext, Result};

/// Collects the repositories of an account, then of each of its organizations.
///
/// Only the account repositories are mandatory: a failing organization source
/// is logged and contributes nothing.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchCandidateRepositoriesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        account: &AccountName,
    ) -> Result<Vec<GhRepository>>;
}

#[derive(Component)]
#[shaku(interface = FetchCandidateRepositoriesInterface)]
pub(crate) struct FetchCandidateRepositories;

#[async_trait]
impl FetchCandidateRepositoriesInterface for FetchCandidateRepositories {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        account: &AccountName,
    ) -> Result<Vec<GhRepository>> {
        let per_page = ctx.config.portfolio.per_page;

        let mut repositories = ctx
            .api_service
            .user_repositories_list(account.as_str(), per_page)
            .await?;

        let organizations = match ctx
            .api_service
            .user_organizations_list(account.as_str())
            .await
        {
            Ok(organizations) => organizations,
            Err(e) => {
                error!(
                    account = %account,
                    error = %e,
                    message = "Could not fetch organizations, skipping them"
                );
                vec![]
            }
        };

        // One organization at a time, in discovery order.
        for organization in organizations {
            match ctx
                .api_service
                .organization_repositories_list(&organization.login, per_page)
                .await
            {
                Ok(organization_repositories) => repositories.extend(organization_repositories),
                Err(e) => {
                    error!(
                        organization = %organization.login,
                        error = %e,
                        message = "Could not fetch organization repositories, skipping them"
                    );
                }
            }
        }

        info!(
            account = %account,
            count = repositories.len(),
            message = "Candidate repositories fetched"
        );

        Ok(repositories)
    }
}
