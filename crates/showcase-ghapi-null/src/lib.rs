//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use showcase_ghapi_interface::{
    types::{GhOrganization, GhRepository},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn user_repositories_list(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn user_organizations_list(&self, username: &str) -> Result<Vec<GhOrganization>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn organization_repositories_list(
        &self,
        organization: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        Ok(vec![])
    }
}
