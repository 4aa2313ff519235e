use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Display-ready project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    /// Repository ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Description, never empty.
    pub description: String,
    /// Code URL.
    pub url: String,
    /// Live demo URL.
    pub demo_url: Option<String>,
    /// Topics.
    pub topics: Vec<String>,
    /// Stars count.
    pub stars: u64,
    /// Forks count.
    pub forks: u64,
    /// Last update.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Primary language.
    pub language: Option<String>,
    /// Owner login.
    pub owner: String,
    /// Owner profile URL.
    pub owner_url: String,
    /// Owner avatar URL.
    pub owner_avatar: String,
    /// Is the owner an organization?
    pub is_org: bool,
}

impl PortfolioEntry {
    /// Builds a display name from a repository name.
    pub fn display_name(repository_name: &str) -> String {
        repository_name.replace(['-', '_'], " ")
    }
}
