//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, LINK};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{AuthenticatedUser, GitHubApi, Repository, filter_repositories};
use crate::auth::Credential;
use crate::error::{ApiError, AuthError, Error, Result};

/// GitHub API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the base URL (used by HTTP tests)
const API_URL_VAR: &str = "GHCLEAN_API_URL";

/// Repositories requested per page
const PAGE_SIZE: usize = 100;

/// GitHub rejects requests without a user agent
const USER_AGENT: &str = concat!("ghclean/", env!("CARGO_PKG_VERSION"));

/// Error payload shape returned by the GitHub API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// GitHub API client authenticated with a bearer token
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: Credential,
}

impl GitHubClient {
    /// Create a new GitHub API client
    pub fn new(token: Credential) -> Result<Self> {
        let base_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| API_BASE_URL.to_string());
        Self::with_base_url(token, base_url)
    }

    pub(crate) fn with_base_url(token: Credential, base_url: String) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Build an authenticated request for an API path
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, "application/vnd.github+json")
    }

    /// Extract the `message` field from a GitHub error body, falling back to
    /// the raw body or the status line.
    async fn error_message(response: Response) -> String {
        let status = response.status();
        match response.text().await {
            Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => parsed.message,
                Err(_) if !body.is_empty() => body,
                Err(_) => status.to_string(),
            },
            Err(_) => status.to_string(),
        }
    }

    /// Map a non-success response to the API error taxonomy
    async fn api_error(response: Response) -> Error {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized.into(),
            StatusCode::FORBIDDEN => ApiError::Forbidden.into(),
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(Self::error_message(response).await).into()
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(Self::error_message(response).await).into()
            }
            status if status.is_server_error() => {
                ApiError::ServerError(Self::error_message(response).await).into()
            }
            status => {
                ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()
            }
        }
    }
}

/// True when the Link header advertises another page
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .map(|link| link.split(',').any(|part| part.contains("rel=\"next\"")))
        .unwrap_or(false)
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn authenticate(&self) -> Result<AuthenticatedUser> {
        let response = self
            .request(Method::GET, "/user")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let user = response
            .json::<AuthenticatedUser>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!("authenticated as {}", user.login);
        Ok(user)
    }

    async fn list_repositories(&self, show_all: bool) -> Result<Vec<Repository>> {
        let mut all_repos = Vec::new();
        let mut page = 1usize;

        // Pages are fetched strictly in order; any failure aborts the whole
        // listing with no partial result.
        loop {
            let mut request = self.request(Method::GET, "/user/repos").query(&[
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
            ]);
            if !show_all {
                request = request.query(&[("affiliation", "owner")]);
            }

            let response = request.send().await.map_err(ApiError::from)?;
            if !response.status().is_success() {
                return Err(Self::api_error(response).await);
            }

            let more = has_next_page(response.headers());
            let repos = response.json::<Vec<Repository>>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;

            debug!("page {} returned {} repositories", page, repos.len());
            all_repos.extend(repos);

            if !more {
                break;
            }
            page += 1;
        }

        // The affiliation scope narrows by relationship only, so the
        // archived/fork exclusion still needs a client-side pass.
        Ok(filter_repositories(all_repos, show_all))
    }

    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let response = self
            .request(Method::GET, &format!("/repos/{}/{}", owner, name))
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response.json::<Repository>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    async fn delete_repository(&self, owner: &str, name: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/repos/{}/{}", owner, name))
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }
}
