//! GitHub adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use showcase_config::Config;
use showcase_ghapi_interface::{
    types::{GhOrganization, GhRepository},
    ApiService, Result,
};

use crate::{
    auth::{build_github_url, get_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let client = get_client_builder(&config)?.build()?;
        Ok(Self { config, client })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, GitHubError> {
        let url = build_github_url(&self.config, segments)?;
        let response = self.client.get(url.clone()).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::HttpStatusError {
                status: status.as_u16(),
                url: url.into(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    fn repositories_query(per_page: u32) -> [(&'static str, String); 2] {
        [("sort", "updated".into()), ("per_page", per_page.to_string())]
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn user_repositories_list(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        Ok(self
            .get_json(
                &["users", username, "repos"],
                &Self::repositories_query(per_page),
            )
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn user_organizations_list(&self, username: &str) -> Result<Vec<GhOrganization>> {
        Ok(self
            .get_json(&["users", username, "orgs"], &[])
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn organization_repositories_list(
        &self,
        organization: &str,
        per_page: u32,
    ) -> Result<Vec<GhRepository>> {
        Ok(self
            .get_json(
                &["orgs", organization, "repos"],
                &Self::repositories_query(per_page),
            )
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use showcase_ghapi_interface::ApiError;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn arrange_service(server: &MockServer, token: &str) -> GithubApiService {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = server.uri();
        config.api.github.token = token.into();
        GithubApiService::new(config).unwrap()
    }

    const REPOSITORIES: &str = r#"[{
        "id": 1,
        "name": "my-cool-app",
        "description": "Cool",
        "html_url": "https://github.com/me/my-cool-app",
        "homepage": null,
        "topics": [],
        "stargazers_count": 2,
        "forks_count": 0,
        "updated_at": "2024-01-01T00:00:00Z",
        "language": "Rust",
        "owner": {"login": "me", "avatar_url": "a", "html_url": "https://github.com/me", "type": "User"}
    }]"#;

    fn json_response(body: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(body, "application/json")
    }

    #[tokio::test]
    async fn user_repositories_list_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "20"))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("user-agent", "showcase/0.0.0"))
            .respond_with(json_response(REPOSITORIES))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server, "");
        let repositories = service.user_repositories_list("me", 20).await.unwrap();
        assert_eq!(repositories.len(), 1);
        assert_eq!(repositories[0].name, "my-cool-app");

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn organization_repositories_list_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/my-org/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "20"))
            .and(header("authorization", "Bearer abcdef"))
            .respond_with(json_response("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server, "abcdef");
        let repositories = service
            .organization_repositories_list("my-org", 20)
            .await
            .unwrap();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn user_organizations_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me/orgs"))
            .respond_with(json_response(
                r#"[{"login": "my-org", "url": "u", "repos_url": "r", "description": null}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server, "");
        let organizations = service.user_organizations_list("me").await.unwrap();
        assert_eq!(
            organizations,
            vec![GhOrganization {
                login: "my-org".into(),
                url: "u".into(),
                repos_url: "r".into(),
            }]
        );
    }

    #[tokio::test]
    async fn login_is_escaped_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/a%3Fb%23c/repos"))
            .and(query_param("sort", "updated"))
            .respond_with(json_response("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server, "");
        let repositories = service
            .organization_repositories_list("a?b#c", 20)
            .await
            .unwrap();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost/repos"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_raw(r#"{"message": "Not Found"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let service = arrange_service(&server, "");
        let error = service.user_repositories_list("ghost", 20).await.unwrap_err();
        match error {
            ApiError::HttpStatusError { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, format!("{}/users/ghost/repos", server.uri()));
            }
            e => panic!("unexpected error: {e:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me/repos"))
            .respond_with(json_response(r#"{"message": "not a list"}"#))
            .mount(&server)
            .await;

        let service = arrange_service(&server, "");
        assert!(matches!(
            service.user_repositories_list("me", 20).await,
            Err(ApiError::ImplementationError { .. })
        ));
    }
}
