//! Opening the store session a seeding run writes through.

use std::sync::Arc;

use async_trait::async_trait;
use portfolio::{
    DocumentPath, DocumentStore, FirestoreStore, Payload, ServiceAccountKey, StoreError,
};
use tracing::info;

use crate::config::{EMULATOR_PROJECT_ID, SeedConfig};

/// Store that logs each payload as JSON and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunStore;

#[async_trait]
impl DocumentStore for DryRunStore {
    async fn set(&self, path: &DocumentPath, payload: &Payload) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(payload)?;
        info!("[dry run] {path}:\n{body}");
        Ok(())
    }

    async fn get(&self, _path: &DocumentPath) -> Result<Option<Payload>, StoreError> {
        Ok(None)
    }
}

/// Builds the session for one run. Created once per process and dropped at
/// exit.
///
/// Dry runs and emulator runs never read the credential file. Otherwise the
/// key is loaded and exchanged for an access token before any write.
pub async fn open_session(config: &SeedConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if config.dry_run {
        info!("Dry run: no documents will be written");
        return Ok(Arc::new(DryRunStore));
    }

    if let Some(host) = &config.emulator_host {
        let project = config.project_id.as_deref().unwrap_or(EMULATOR_PROJECT_ID);
        info!("Using Firestore emulator at {host} (project {project})");
        let store = FirestoreStore::emulator(host, project).with_database(&config.database_id);
        return Ok(Arc::new(store));
    }

    let key = ServiceAccountKey::from_file(&config.credentials_path)?;
    let mut store = FirestoreStore::connect(&key)
        .await?
        .with_database(&config.database_id);
    if let Some(project) = &config.project_id {
        store = store.with_project(project);
    }

    info!(
        "Connected to project {} (database {})",
        store.project_id(),
        store.database_id()
    );
    Ok(Arc::new(store))
}
