//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of [`GitHubApi`] so the command layer can
//! be exercised without real API calls.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{AuthenticatedUser, GitHubApi, Repository, filter_repositories};
use crate::error::{ApiError, Result};

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub list_repositories: usize,
    pub get_repository: usize,
    pub delete_repository: usize,
}

/// Mock API client holding in-memory fixtures.
///
/// Configure via the builder methods, then assert on [`CallCounts`].
#[derive(Default)]
pub struct MockGitHubClient {
    /// Repositories backing list and get operations
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Error to return from the next call, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Call counters for verification
    calls: Arc<Mutex<CallCounts>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with repositories
    pub fn with_repos(self, repos: Vec<Repository>) -> Self {
        *self.repos.try_lock().unwrap() = repos;
        self
    }

    /// Inject an error returned by the next API call
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().unwrap() = Some(error);
        self
    }

    /// Snapshot of the call counters
    pub async fn calls(&self) -> CallCounts {
        self.calls.lock().await.clone()
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn authenticate(&self) -> Result<AuthenticatedUser> {
        self.calls.lock().await.authenticate += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(AuthenticatedUser {
            login: "mock-user".to_string(),
        })
    }

    async fn list_repositories(&self, show_all: bool) -> Result<Vec<Repository>> {
        self.calls.lock().await.list_repositories += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        let repos = self.repos.lock().await.clone();
        Ok(filter_repositories(repos, show_all))
    }

    async fn get_repository(&self, _owner: &str, name: &str) -> Result<Repository> {
        self.calls.lock().await.get_repository += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        self.repos
            .lock()
            .await
            .iter()
            .find(|repo| repo.name == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("repository {}", name)).into())
    }

    async fn delete_repository(&self, _owner: &str, name: &str) -> Result<()> {
        self.calls.lock().await.delete_repository += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        self.repos.lock().await.retain(|repo| repo.name != name);
        Ok(())
    }
}

mod tests {
    use super::*;
    use crate::client::sample_repo;

    #[tokio::test]
    async fn test_mock_tracks_calls_and_consumes_injected_error() {
        let mock = MockGitHubClient::new()
            .with_repos(vec![sample_repo("a", false, true, false)])
            .with_error(ApiError::Unauthorized);

        assert!(mock.authenticate().await.is_err());
        let user = mock.authenticate().await.unwrap();
        assert_eq!(user.login, "mock-user");

        let repos = mock.list_repositories(true).await.unwrap();
        assert_eq!(repos.len(), 1);

        let calls = mock.calls().await;
        assert_eq!(calls.authenticate, 2);
        assert_eq!(calls.list_repositories, 1);
        assert_eq!(calls.get_repository, 0);
    }
}
