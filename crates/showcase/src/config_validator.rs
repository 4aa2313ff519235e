//! Validation utilities.

use std::fmt::Write;

use showcase_config::Config;
use thiserror::Error;

const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        write!(error, "  - Invalid env. var.: {} ({})", name, reason).unwrap();
    }

    let mut error = String::new();

    if config.api.github.root_url.trim().is_empty() {
        _missing(&mut error, "SHOWCASE_API_GITHUB_ROOT_URL");
    }

    if config.portfolio.per_page == 0 || config.portfolio.per_page > MAX_PER_PAGE {
        _invalid(
            &mut error,
            "SHOWCASE_PORTFOLIO_PER_PAGE",
            "must be between 1 and 100",
        );
    }

    if config.portfolio.max_entries == 0 {
        _invalid(
            &mut error,
            "SHOWCASE_PORTFOLIO_MAX_ENTRIES",
            "must be at least 1",
        );
    }

    if config.portfolio.fallback_description.trim().is_empty() {
        _missing(&mut error, "SHOWCASE_PORTFOLIO_FALLBACK_DESCRIPTION");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
