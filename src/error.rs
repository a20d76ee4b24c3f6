//! Error types for the ghclean CLI

use thiserror::Error;

/// Result type alias for ghclean operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid repository format '{0}'. Use 'owner/repo'")]
    InvalidRepoArg(String),

    #[error("{0}")]
    Other(String),
}

/// Credential and identity-verification errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(
        "GitHub token not found. Set the GITHUB_TOKEN environment variable or add it to a .env file"
    )]
    CredentialMissing,

    #[error("Failed to authenticate with GitHub ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that GITHUB_TOKEN is valid.")]
    Unauthorized,

    #[error("Access denied. The token does not grant access to this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
