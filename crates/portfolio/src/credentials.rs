use std::{
    fmt,
    path::{Path, PathBuf},
};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

/// OAuth scope granting read/write access to Firestore.
pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read credential file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed credential file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unsupported credential type: {0}")]
    UnsupportedType(String),
    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Token exchange rejected: {0}")]
    TokenExchange(String),
    #[error("Access token expired at {0}")]
    Expired(OffsetDateTime),
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Service-account key file as downloaded from the cloud console.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at
}

impl ServiceAccountKey {
    /// Loads and validates a key file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AuthError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        let key: Self = serde_json::from_str(json)?;
        if key.key_type != "service_account" {
            return Err(AuthError::UnsupportedType(key.key_type));
        }
        Ok(key)
    }

    pub fn claims(&self, now: OffsetDateTime) -> Claims {
        Claims {
            iss: self.client_email.clone(),
            scope: DATASTORE_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            exp: (now + ASSERTION_LIFETIME).unix_timestamp(),
            iat: now.unix_timestamp(),
        }
    }

    /// Signs the RS256 assertion exchanged for an access token.
    pub fn assertion(&self, now: OffsetDateTime) -> Result<String, AuthError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.private_key_id.clone());
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(encode(&header, &self.claims(now), &key)?)
    }
}

/// Bearer token attached to every store request.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
    expires_at: OffsetDateTime,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_at: OffsetDateTime) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// The fixed token the Firestore emulator accepts as an admin.
    pub fn emulator() -> Self {
        Self::new("owner", OffsetDateTime::now_utc() + Duration::days(365))
    }

    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }

    /// The token to send at `now`, refusing one that has already expired.
    pub fn bearer(&self, now: OffsetDateTime) -> Result<&str, AuthError> {
        if self.is_expired(now) {
            return Err(AuthError::Expired(self.expires_at));
        }
        Ok(&self.token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME.whole_seconds()
}

/// Exchanges a signed assertion for an access token at the key's `token_uri`.
pub async fn fetch_access_token(
    client: &Client,
    key: &ServiceAccountKey,
) -> Result<AccessToken, AuthError> {
    let now = OffsetDateTime::now_utc();
    let assertion = key.assertion(now)?;

    debug!("Requesting access token for {}", key.client_email);

    let resp = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::TokenExchange(format!("Status {status}: {body}")));
    }

    let token: TokenResponse = resp.json().await?;
    Ok(AccessToken::new(
        token.access_token,
        now + Duration::seconds(token.expires_in),
    ))
}
