//! List command implementation

use log::debug;
use tabled::Tabled;

use crate::auth;
use crate::client::{GitHubApi, GitHubClient, Repository};
use crate::error::Result;
use crate::output::{json, table};

/// Repository row for table display
#[derive(Tabled)]
struct RepoDisplay {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Private")]
    private: bool,

    #[tabled(rename = "Fork")]
    fork: bool,

    #[tabled(rename = "Archived")]
    archived: bool,
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            private: repo.private,
            fork: repo.fork,
            archived: repo.archived,
        }
    }
}

/// Run the list command
pub async fn run(show_all: bool, json_output: bool) -> Result<()> {
    let credential = auth::resolve()?;
    let client = GitHubClient::new(credential)?;

    let user = client.authenticate().await?;
    debug!("listing repositories for {}", user.login);

    let output = fetch_and_render(&client, show_all, json_output).await?;
    println!("{}", output);

    Ok(())
}

/// Fetch the repository listing and render it in the requested format
async fn fetch_and_render(
    client: &impl GitHubApi,
    show_all: bool,
    json_output: bool,
) -> Result<String> {
    let repos = client.list_repositories(show_all).await?;

    if json_output {
        Ok(json::format_json(&repos)?)
    } else {
        let rows: Vec<RepoDisplay> = repos.into_iter().map(RepoDisplay::from).collect();
        Ok(table::format_table(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockGitHubClient, sample_repo};
    use crate::error::{ApiError, Error};

    #[tokio::test]
    async fn test_json_output_excludes_forks_and_archived() {
        let client = MockGitHubClient::new().with_repos(vec![
            sample_repo("a", false, false, false),
            sample_repo("b", true, true, false),
        ]);

        let output = fetch_and_render(&client, false, true).await.unwrap();

        assert_eq!(
            output,
            "[\n  {\n    \"name\": \"a\",\n    \"private\": false,\n    \"fork\": false,\n    \"archived\": false\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_json_output_show_all_keeps_everything() {
        let client = MockGitHubClient::new().with_repos(vec![
            sample_repo("a", false, false, false),
            sample_repo("b", true, true, false),
        ]);

        let output = fetch_and_render(&client, true, true).await.unwrap();

        let parsed: Vec<Repository> = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = parsed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_table_output_has_fixed_columns() {
        let client = MockGitHubClient::new().with_repos(vec![sample_repo(
            "widget", true, false, false,
        )]);

        let output = fetch_and_render(&client, false, false).await.unwrap();

        for header in ["Name", "Private", "Fork", "Archived"] {
            assert!(output.contains(header), "missing column {}", header);
        }
        assert!(output.contains("widget"));
        assert!(output.contains("true"));
        assert!(output.contains("false"));
    }

    #[tokio::test]
    async fn test_table_output_empty_listing() {
        let client = MockGitHubClient::new();
        let output = fetch_and_render(&client, false, false).await.unwrap();
        assert_eq!(output, "No results found.");
    }

    #[tokio::test]
    async fn test_listing_error_yields_no_output() {
        let client = MockGitHubClient::new()
            .with_repos(vec![sample_repo("a", false, false, false)])
            .with_error(ApiError::ServerError("boom".to_string()));

        let err = fetch_and_render(&client, false, true).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));
    }
}
