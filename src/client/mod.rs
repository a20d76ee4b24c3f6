//! GitHub API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod github;
#[cfg(test)]
pub mod mock;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;

/// GitHub API operations consumed by the CLI
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Verify the token by fetching the authenticated identity
    async fn authenticate(&self) -> Result<AuthenticatedUser>;

    /// List repositories for the authenticated user, in server order.
    ///
    /// When `show_all` is false the query is scoped to `affiliation=owner`
    /// and archived/forked repositories are filtered out of the result.
    async fn list_repositories(&self, show_all: bool) -> Result<Vec<Repository>>;

    /// Look up a single repository by owner and name
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository>;

    /// Delete a repository by owner and name
    async fn delete_repository(&self, owner: &str, name: &str) -> Result<()>;
}

/// The identity behind the token, per `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    /// Account login name
    pub login: String,
}

/// Repository attributes consumed by the CLI.
///
/// A projection of server state; booleans the API omits default to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (without the owner prefix)
    pub name: String,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,

    /// Whether the repository is archived
    #[serde(default)]
    pub archived: bool,
}

/// Keep only repositories that are neither archived nor forks.
///
/// Identity when `show_all` is true. Order is preserved either way.
pub fn filter_repositories(repos: Vec<Repository>, show_all: bool) -> Vec<Repository> {
    if show_all {
        return repos;
    }
    repos
        .into_iter()
        .filter(|repo| !repo.archived && !repo.fork)
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_repo(name: &str, private: bool, fork: bool, archived: bool) -> Repository {
    Repository {
        name: name.to_string(),
        private,
        fork,
        archived,
    }
}
