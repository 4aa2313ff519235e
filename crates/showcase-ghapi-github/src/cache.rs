//! Revalidation cache.

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use showcase_ghapi_interface::{
    types::{GhOrganization, GhRepository},
    ApiService, Result,
};
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;

struct CacheEntry<T> {
    fetched_at: Instant,
    value: T,
}

struct ResponseCache<T> {
    revalidate_after: Duration,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> ResponseCache<T> {
    fn new(revalidate_after: Duration) -> Self {
        Self {
            revalidate_after,
            entries: RwLock::new(HashMap::new()),
        }
    }

    async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.revalidate_after)
            .map(|entry| entry.value.clone())
    }

    /// Stores a fresh value and drops every expired entry.
    async fn insert(&self, key: String, value: T) {
        let revalidate_after = self.revalidate_after;
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < revalidate_after);
        entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                value,
            },
        );
    }
}

/// GitHub Api Service reusing successful responses for a revalidation window.
///
/// Failures are never cached, so a failing source is retried on the next call.
/// Hits only happen across portfolio builds sharing the same service, so a
/// one-shot command never benefits from it.
pub struct CachedApiService<S> {
    inner: S,
    repositories: ResponseCache<Vec<GhRepository>>,
    organizations: ResponseCache<Vec<GhOrganization>>,
}

impl<S: ApiService> CachedApiService<S> {
    /// Creates a new service.
    pub fn new(inner: S, revalidate_after: Duration) -> Self {
        Self {
            inner,
            repositories: ResponseCache::new(revalidate_after),
            organizations: ResponseCache::new(revalidate_after),
        }
    }
}

#[async_trait]
impl<S: ApiService> ApiService for CachedApiService<S> {
    async fn user_repositories_list(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        let key = format!("users/{username}/repos/{per_page}");
        if let Some(value) = self.repositories.get(&key).await {
            debug!(key = %key, "Using cached response");
            return Ok(value);
        }

        let value = self.inner.user_repositories_list(username, per_page).await?;
        self.repositories.insert(key, value.clone()).await;
        Ok(value)
    }

    async fn user_organizations_list(&self, username: &str) -> Result<Vec<GhOrganization>> {
        let key = format!("users/{username}/orgs");
        if let Some(value) = self.organizations.get(&key).await {
            debug!(key = %key, "Using cached response");
            return Ok(value);
        }

        let value = self.inner.user_organizations_list(username).await?;
        self.organizations.insert(key, value.clone()).await;
        Ok(value)
    }

    async fn organization_repositories_list(
        &self,
        organization: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        let key = format!("orgs/{organization}/repos/{per_page}");
        if let Some(value) = self.repositories.get(&key).await {
            debug!(key = %key, "Using cached response");
            return Ok(value);
        }

        let value = self
            .inner
            .organization_repositories_list(organization, per_page)
            .await?;
        self.repositories.insert(key, value.clone()).await;
        Ok(value)
    }
}
