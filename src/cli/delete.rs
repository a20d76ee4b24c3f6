//! Delete command implementation

use std::fmt;

use colored::Colorize;

use crate::auth;
use crate::cli::confirm::ConfirmationPrompt;
use crate::client::{GitHubApi, GitHubClient};
use crate::error::{ApiError, Error, Result};

/// Parsed `owner/repo` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse an `owner/repo` slug: exactly one `/`, both parts non-empty.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::InvalidRepoArg(input.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Run the delete command
pub async fn run(repo: &str, force: bool, prompt: &mut dyn ConfirmationPrompt) -> Result<()> {
    let target = RepoRef::parse(repo)?;

    let credential = auth::resolve()?;
    let client = GitHubClient::new(credential)?;
    client.authenticate().await?;

    delete_repository(&client, &target, force, prompt).await
}

/// Verify, confirm, delete. The repository is not re-checked between the
/// existence check and the delete call.
async fn delete_repository(
    client: &impl GitHubApi,
    target: &RepoRef,
    force: bool,
    prompt: &mut dyn ConfirmationPrompt,
) -> Result<()> {
    match client.get_repository(&target.owner, &target.name).await {
        Ok(_) => {}
        Err(Error::Api(ApiError::NotFound(_))) => {
            return Err(Error::Other(format!("Repository '{}' not found", target)));
        }
        Err(err) => return Err(err),
    }

    if !force {
        let question = format!(
            "Are you sure you want to delete '{}'? {}:",
            target,
            "This action cannot be undone".red()
        );
        if !prompt.confirm(&question)? {
            eprintln!("Operation cancelled.");
            return Ok(());
        }
    }

    client.delete_repository(&target.owner, &target.name).await?;

    eprintln!(
        "{} Repository '{}' deleted successfully.",
        "✓".green(),
        target
    );

    Ok(())
}
