//! Document seeding.

use portfolio::{
    DocumentKey, DocumentPath, DocumentStore, PORTFOLIO_COLLECTION, Payload, PortfolioDocument,
    StoreError, firestore_value::encode_fields,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::SeedTarget;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Payload must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SeedError {
    /// Credential or token failures, as opposed to write failures.
    pub fn is_authentication(&self) -> bool {
        matches!(self, SeedError::Store(e) if e.is_authentication())
    }
}

/// Serializes `value`, requiring a JSON object at the top level whose every
/// value has a Firestore representation.
pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Payload, SeedError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => {
            encode_fields(&map)?;
            Ok(map)
        }
        Value::Null => Err(SeedError::NotAnObject("null")),
        Value::Bool(_) => Err(SeedError::NotAnObject("a boolean")),
        Value::Number(_) => Err(SeedError::NotAnObject("a number")),
        Value::String(_) => Err(SeedError::NotAnObject("a string")),
        Value::Array(_) => Err(SeedError::NotAnObject("an array")),
    }
}

/// Outcome of seeding several documents.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    /// Keys written successfully, in order.
    pub succeeded: Vec<String>,
    /// Keys that failed, with the error detail.
    pub failed: Vec<(String, String)>,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Writes portfolio documents through a [`DocumentStore`].
pub struct Seeder<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a seeder writing into the `portfolio` collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: PORTFOLIO_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn path(&self, key: &str) -> Result<DocumentPath, SeedError> {
        Ok(DocumentPath::new(
            self.collection.as_str(),
            DocumentKey::new(key)?,
        )?)
    }

    /// Replaces the document at `<collection>/<key>` with `payload`.
    ///
    /// Key validation and serialization happen before any I/O, so an invalid
    /// call never reaches the store.
    pub async fn seed<T>(&self, key: &str, payload: &T) -> Result<(), SeedError>
    where
        T: Serialize + ?Sized,
    {
        let document = PortfolioDocument {
            path: self.path(key)?,
            payload: to_payload(payload)?,
        };
        self.seed_document(&document).await
    }

    /// Replaces `document.path` with `document.payload`.
    pub async fn seed_document(&self, document: &PortfolioDocument) -> Result<(), SeedError> {
        debug!(
            "Writing {} ({} top-level fields)",
            document.path,
            document.payload.len()
        );
        self.store.set(&document.path, &document.payload).await?;
        Ok(())
    }

    /// Reads back a document; `None` if it was never written.
    pub async fn fetch(&self, key: &str) -> Result<Option<Payload>, SeedError> {
        let path = self.path(key)?;
        Ok(self.store.get(&path).await?)
    }

    pub async fn seed_target(&self, target: SeedTarget) -> Result<(), SeedError> {
        let document = target.document(&self.collection)?;
        self.seed_document(&document).await
    }

    /// Seeds each target in order, reporting every outcome. A failure does
    /// not stop the remaining targets.
    pub async fn seed_all(&self, targets: &[SeedTarget]) -> SeedReport {
        let mut report = SeedReport::default();

        for &target in targets {
            match self.seed_target(target).await {
                Ok(()) => {
                    info!(
                        "✅ {} seeded to {}/{}",
                        target.noun(),
                        self.collection,
                        target.key()
                    );
                    report.succeeded.push(target.key().to_string());
                }
                Err(e) => {
                    error!("❌ Error seeding {}: {e}", target.noun());
                    report.failed.push((target.key().to_string(), e.to_string()));
                }
            }
        }

        report
    }
}
