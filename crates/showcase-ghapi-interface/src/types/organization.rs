use serde::{Deserialize, Serialize};

/// GitHub Organization membership.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganization {
    /// Login.
    pub login: String,
    /// API URL.
    pub url: String,
    /// Repositories API URL.
    pub repos_url: String,
}
