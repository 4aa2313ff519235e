use serde::{Deserialize, Serialize};

use super::GhAccountKind;

/// GitHub repository owner.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOwner {
    /// Login.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Profile URL.
    pub html_url: String,
    /// Account kind.
    #[serde(rename = "type")]
    pub kind: GhAccountKind,
}
