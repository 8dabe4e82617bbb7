//! Configuration for seeding runs.

use std::path::PathBuf;

use portfolio::{PORTFOLIO_COLLECTION, document_store::DEFAULT_DATABASE};

/// Key file looked up when no path is given.
pub const DEFAULT_CREDENTIALS_PATH: &str = "./serviceAccountKey.json";

/// Project used against the emulator when none is configured.
pub const EMULATOR_PROJECT_ID: &str = "demo-portfolio";

/// Where and how a seeding run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Service-account key file.
    pub credentials_path: PathBuf,

    /// Overrides the key file's `project_id`.
    pub project_id: Option<String>,

    /// Firestore database id.
    pub database_id: String,

    /// Collection the documents are written to.
    pub collection: String,

    /// `host:port` of a Firestore emulator. Skips authentication when set.
    pub emulator_host: Option<String>,

    /// Log payloads instead of writing them.
    pub dry_run: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            project_id: None,
            database_id: DEFAULT_DATABASE.to_string(),
            collection: PORTFOLIO_COLLECTION.to_string(),
            emulator_host: None,
            dry_run: false,
        }
    }
}

impl SeedConfig {
    /// Configuration targeting a local emulator.
    pub fn emulator(host: impl Into<String>) -> Self {
        Self {
            emulator_host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Configuration that logs payloads and performs no I/O.
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }
}
