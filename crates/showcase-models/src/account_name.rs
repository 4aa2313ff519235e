//! Account name.

use std::str::FromStr;

use thiserror::Error;

/// Account name error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum AccountNameError {
    /// Invalid account name.
    #[error("Invalid account name: '{}'", name)]
    InvalidAccountName { name: String },
}

const MAX_LENGTH: usize = 39;

/// GitHub account name whose projects are showcased.
///
/// Follows GitHub login rules: 1 to 39 ASCII letters, digits or `-`, not
/// starting with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a new account name.
    pub fn new(name: &str) -> Result<Self, AccountNameError> {
        let trimmed = name.trim();
        if !Self::is_valid_login(trimmed) {
            return Err(AccountNameError::InvalidAccountName { name: name.into() });
        }

        Ok(Self(trimmed.into()))
    }

    /// Get name as str.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid_login(login: &str) -> bool {
        !login.is_empty()
            && login.len() <= MAX_LENGTH
            && !login.starts_with('-')
            && login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl FromStr for AccountName {
    type Err = AccountNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl TryFrom<&str> for AccountName {
    type Error = AccountNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert_eq!(AccountName::new("JohnJandayan").unwrap().as_str(), "JohnJandayan");
        assert_eq!(AccountName::new("  octocat ").unwrap().as_str(), "octocat");
    }

    #[test]
    fn invalid_names() {
        assert!(AccountName::new("").is_err());
        assert!(AccountName::new("   ").is_err());
        assert!(AccountName::new("me/repo").is_err());
        assert!(AccountName::new("two words").is_err());
    }

    #[test]
    fn url_characters_are_rejected() {
        for name in ["..", "a?b", "me#x", "me%2Fother", "me.io", "under_score", "-me"] {
            assert!(
                matches!(
                    AccountName::new(name),
                    Err(AccountNameError::InvalidAccountName { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn length_is_bounded() {
        assert!(AccountName::new(&"a".repeat(39)).is_ok());
        assert!(AccountName::new(&"a".repeat(40)).is_err());
        assert!(AccountName::new("a").is_ok());
        assert!(AccountName::new("my-org-2").is_ok());
    }
}
