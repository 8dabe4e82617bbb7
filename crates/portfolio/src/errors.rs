use thiserror::Error;

use crate::credentials::AuthError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document key: {0}")]
    InvalidKey(String),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    #[error("Value cannot be stored: {0}")]
    Unrepresentable(String),

    #[error("Malformed document: {0}")]
    Decode(String),

    #[error("Injected failure: {0}")]
    Injected(String),
}

impl StoreError {
    /// True when the failure happened before any write could be attempted
    /// because the credential or token exchange was unusable.
    pub fn is_authentication(&self) -> bool {
        matches!(self, StoreError::Authentication(_))
    }
}
