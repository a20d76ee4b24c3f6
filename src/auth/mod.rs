//! Credential resolution for the GitHub API token
//!
//! The token is looked up in layers: the process environment first, then a
//! `.env` file in the working directory, then `$HOME/.env`. Dotenv files are
//! read, never exported into the environment, and a missing or malformed
//! file is not an error.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AuthError, Result};

/// Environment variable (and dotenv key) holding the token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Bearer token for the GitHub API.
///
/// Invariant: non-empty. The Debug impl redacts the value so the token
/// cannot leak through logs.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token, rejecting empty values.
    pub(crate) fn new(token: String) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The raw token, for building the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Resolve the GitHub token from the environment and dotenv files.
pub fn resolve() -> Result<Credential> {
    let mut dotenv_paths = vec![PathBuf::from(".env")];
    if let Some(home) = dirs::home_dir() {
        dotenv_paths.push(home.join(".env"));
    }

    resolve_from(std::env::var(TOKEN_VAR).ok(), &dotenv_paths)
        .ok_or_else(|| AuthError::CredentialMissing.into())
}

/// Layered lookup: environment value first, then each dotenv path in order.
fn resolve_from(env_token: Option<String>, dotenv_paths: &[PathBuf]) -> Option<Credential> {
    if let Some(credential) = env_token.and_then(Credential::new) {
        debug!("using {} from process environment", TOKEN_VAR);
        return Some(credential);
    }

    for path in dotenv_paths {
        if let Some(credential) = read_dotenv_token(path) {
            debug!("using {} from {}", TOKEN_VAR, path.display());
            return Some(credential);
        }
    }

    None
}

/// Read the token key out of a dotenv file without touching the environment.
///
/// Absent files and unparseable entries are skipped.
fn read_dotenv_token(path: &Path) -> Option<Credential> {
    let entries = dotenvy::from_path_iter(path).ok()?;
    for entry in entries {
        let Ok((key, value)) = entry else { continue };
        if key == TOKEN_VAR {
            return Credential::new(value);
        }
    }
    None
}
