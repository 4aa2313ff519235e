use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhOwner;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhRepository {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Repository URL.
    pub html_url: String,
    /// Homepage.
    pub homepage: Option<String>,
    /// Topics.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Stars count.
    pub stargazers_count: u64,
    /// Forks count.
    pub forks_count: u64,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Primary language.
    pub language: Option<String>,
    /// Owner.
    pub owner: GhOwner,
}

impl GhRepository {
    /// Get description, if not blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Get homepage, if not blank.
    pub fn homepage(&self) -> Option<&str> {
        non_blank(self.homepage.as_deref())
    }

    /// Has a description or at least one topic?
    pub fn has_metadata(&self) -> bool {
        self.description().is_some() || !self.topics.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
