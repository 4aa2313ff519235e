use async_trait::async_trait;

use crate::{
    types::{GhOrganization, GhRepository},
    Result,
};

/// GitHub API service interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List repositories owned by a user, most recently updated first.
    async fn user_repositories_list(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>>;
    /// List organizations a user publicly belongs to.
    async fn user_organizations_list(&self, username: &str) -> Result<Vec<GhOrganization>>;
    /// List repositories owned by an organization, most recently updated first.
    async fn organization_repositories_list(
        &self,
        organization: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>>;
}
