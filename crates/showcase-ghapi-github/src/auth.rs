//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use reqwest::{ClientBuilder, Url};
use showcase_config::Config;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Get a GitHub client builder, authenticated when a token is configured.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );

    if let Some(value) = get_authorization_header(config)? {
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("showcase/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL from path segments, each one percent-encoded.
pub fn build_github_url(config: &Config, segments: &[&str]) -> Result<Url, GitHubError> {
    let root_url = &config.api.github.root_url;
    let invalid_root = || GitHubError::InvalidRootUrlError {
        root_url: root_url.clone(),
    };

    let mut url = Url::parse(root_url).map_err(|_| invalid_root())?;
    url.path_segments_mut()
        .map_err(|_| invalid_root())?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

fn get_authorization_header(
    config: &Config,
) -> Result<Option<header::HeaderValue>, GitHubError> {
    let token = config.api.github.token.trim();
    if token.is_empty() {
        return Ok(None);
    }

    let mut value = header::HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| GitHubError::InvalidTokenError)?;
    value.set_sensitive(true);

    Ok(Some(value))
}
