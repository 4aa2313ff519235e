//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

/// Repositories hidden from the portfolio by default.
pub const DEFAULT_EXCLUDED_REPOSITORIES: &[&str] = &[
    "portfolio",
    "my professional portfolio",
    "johnjandayan.github.io",
    "my-professional-portfolio",
];

/// Description used when a repository has none.
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "A cool project I worked on";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token, empty for anonymous access.
    pub token: String,
    /// How long a successful response is reused (in seconds), 0 to disable.
    /// Only long-lived callers building several portfolios see cache hits.
    pub revalidate_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Page size requested for each repository source.
    pub per_page: u32,
    /// Maximum number of displayed entries.
    pub max_entries: usize,
    /// Repository names (or name fragments) to hide.
    pub excluded_repositories: Vec<String>,
    /// Description used when a repository has none.
    pub fallback_description: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Showcase configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Portfolio options.
    pub portfolio: PortfolioConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("SHOWCASE_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("SHOWCASE_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("SHOWCASE_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("SHOWCASE_API_GITHUB_TOKEN", ""),
                    revalidate_seconds: env_to_u64("SHOWCASE_API_GITHUB_REVALIDATE_SECONDS", 3600),
                },
            },
            portfolio: PortfolioConfig {
                per_page: env_to_u32("SHOWCASE_PORTFOLIO_PER_PAGE", 20),
                max_entries: env_to_usize("SHOWCASE_PORTFOLIO_MAX_ENTRIES", 10),
                excluded_repositories: env_to_list(
                    "SHOWCASE_PORTFOLIO_EXCLUDED_REPOSITORIES",
                    DEFAULT_EXCLUDED_REPOSITORIES,
                ),
                fallback_description: env_to_str(
                    "SHOWCASE_PORTFOLIO_FALLBACK_DESCRIPTION",
                    DEFAULT_FALLBACK_DESCRIPTION,
                ),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("SHOWCASE_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

fn env_to_list(name: &str, default: &[&str]) -> Vec<String> {
    match env::var(name) {
        Ok(value) => parse_list(&value),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
