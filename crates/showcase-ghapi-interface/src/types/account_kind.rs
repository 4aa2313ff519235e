use serde::{Deserialize, Serialize};

/// GitHub account kind.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum GhAccountKind {
    /// User.
    #[default]
    User,
    /// Organization.
    Organization,
    /// Any other kind (bots, enterprises, ...).
    #[serde(other)]
    Other,
}

impl GhAccountKind {
    /// Is it an organization?
    pub fn is_organization(self) -> bool {
        matches!(self, Self::Organization)
    }
}
