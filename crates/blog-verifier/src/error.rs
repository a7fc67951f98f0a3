//! Verification errors.

use blog_core::error::RepoError;
use thiserror::Error;

/// Why a contract check failed.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The API answered, but not the way the contract requires.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Store error: {0}")]
    Store(#[from] RepoError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}
