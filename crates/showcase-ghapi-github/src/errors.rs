use showcase_ghapi_interface::ApiError;

/// GitHub adapter error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GitHub API returned status {} for {}", status, url)]
    HttpStatusError { status: u16, url: String },

    #[error("Invalid GitHub token, it cannot be used as a header value")]
    InvalidTokenError,

    #[error("Invalid GitHub API root URL: {}", root_url)]
    InvalidRootUrlError { root_url: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::HttpStatusError { status, url } => ApiError::HttpStatusError { status, url },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
