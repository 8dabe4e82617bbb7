use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    credentials::{AccessToken, ServiceAccountKey, fetch_access_token},
    errors::StoreError,
    firestore_value::{decode_document, decode_fields, encode_fields},
    models::{DocumentPath, Payload},
};

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_DATABASE: &str = "(default)";

/// A remote or local store holding named JSON documents.
///
/// `set` always replaces the whole document; there is no field merge.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn set(&self, path: &DocumentPath, payload: &Payload) -> Result<(), StoreError>;

    /// Returns `None` when the document does not exist.
    async fn get(&self, path: &DocumentPath) -> Result<Option<Payload>, StoreError>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    async fn set(&self, path: &DocumentPath, payload: &Payload) -> Result<(), StoreError> {
        (**self).set(path, payload).await
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Payload>, StoreError> {
        (**self).get(path).await
    }
}

/// Firestore REST client holding one authenticated session.
#[derive(Clone, Debug)]
pub struct FirestoreStore {
    client: Client,
    base_url: String,
    project_id: String,
    database_id: String,
    token: AccessToken,
}

impl FirestoreStore {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token: AccessToken,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            project_id: project_id.into(),
            database_id: DEFAULT_DATABASE.to_string(),
            token,
        }
    }

    /// Authenticates with a service-account key and opens a session against
    /// the key's project.
    pub async fn connect(key: &ServiceAccountKey) -> Result<Self, StoreError> {
        let client = Client::new();
        let token = fetch_access_token(&client, key).await?;
        info!("Authenticated as {}", key.client_email);
        Ok(Self::new(
            client,
            FIRESTORE_BASE_URL,
            key.project_id.clone(),
            token,
        ))
    }

    /// Session against a local Firestore emulator, e.g. `localhost:8080`.
    pub fn emulator(host: &str, project_id: impl Into<String>) -> Self {
        Self::new(
            Client::new(),
            format!("http://{host}"),
            project_id,
            AccessToken::emulator(),
        )
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_database(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// REST resource URL of a document, with every segment percent-encoded.
    pub fn document_url(&self, path: &DocumentPath) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                &self.project_id,
                "databases",
                &self.database_id,
                "documents",
                path.collection(),
                path.key().as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn set(&self, path: &DocumentPath, payload: &Payload) -> Result<(), StoreError> {
        let url = self.document_url(path)?;
        let body = json!({ "fields": encode_fields(payload)? });
        let token = self.token.bearer(OffsetDateTime::now_utc())?;

        debug!("PATCH {url}");

        // No updateMask: the stored document becomes exactly `fields`.
        let resp = self
            .client
            .patch(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Wrote {path} ({})", resp.status());
        Ok(())
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Payload>, StoreError> {
        let url = self.document_url(path)?;
        let token = self.token.bearer(OffsetDateTime::now_utc())?;

        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let document: serde_json::Value = resp.json().await?;
        Ok(Some(decode_document(&document)?))
    }
}

/// Process-local store with the same replace semantics as Firestore.
///
/// Payloads pass through the Firestore value codec on write, so what reads
/// back is what the remote store would return.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    documents: Arc<RwLock<HashMap<DocumentPath, Payload>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail without touching stored documents.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn set(&self, path: &DocumentPath, payload: &Payload) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Injected(format!("write to {path} rejected")));
        }

        let stored = decode_fields(&encode_fields(payload)?)?;
        self.documents.write().await.insert(path.clone(), stored);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Payload>, StoreError> {
        Ok(self.documents.read().await.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::DocumentKey, test_support::serve_once};
    use serde_json::Value;

    fn path(key: &str) -> DocumentPath {
        DocumentPath::portfolio(DocumentKey::new(key).unwrap())
    }

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_document_url() {
        let store = FirestoreStore::new(
            Client::new(),
            FIRESTORE_BASE_URL,
            "my-project",
            AccessToken::emulator(),
        );
        assert_eq!(
            store.document_url(&path("about")).unwrap().as_str(),
            "https://firestore.googleapis.com/v1/projects/my-project/databases/(default)/documents/portfolio/about"
        );
    }

    #[test]
    fn test_document_url_encodes_segments() {
        let store = FirestoreStore::emulator("localhost:8080", "demo")
            .with_database("staging");
        let url = store.document_url(&path("talk notes?")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/projects/demo/databases/staging/documents/portfolio/talk%20notes%3F"
        );
    }

    #[test]
    fn test_emulator_session() {
        let store = FirestoreStore::emulator("127.0.0.1:8080", "demo-portfolio")
            .with_project("other");
        assert_eq!(store.project_id(), "other");
        assert_eq!(store.database_id(), DEFAULT_DATABASE);
    }

    fn live_store(base_url: &str) -> FirestoreStore {
        let token = AccessToken::new(
            "test-token",
            OffsetDateTime::now_utc() + time::Duration::hours(1),
        );
        FirestoreStore::new(Client::new(), base_url, "demo", token)
    }

    #[tokio::test]
    async fn test_set_sends_full_document_patch() {
        let (base_url, server) = serve_once(200, "{}").await;
        let store = live_store(&base_url);

        store
            .set(
                &path("certifications"),
                &payload(serde_json::json!({"items": [{"title": "A", "provider": "X"}]})),
            )
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.method, "PATCH");
        assert_eq!(
            request.target,
            "/v1/projects/demo/databases/(default)/documents/portfolio/certifications"
        );
        assert!(!request.target.contains('?'), "no updateMask expected");
        assert_eq!(request.header("authorization"), Some("Bearer test-token"));
        assert_eq!(
            request.body_json(),
            serde_json::json!({"fields": {
                "items": {"arrayValue": {"values": [
                    {"mapValue": {"fields": {
                        "title": {"stringValue": "A"},
                        "provider": {"stringValue": "X"}
                    }}}
                ]}}
            }})
        );
    }

    #[tokio::test]
    async fn test_set_maps_error_status() {
        let (base_url, server) = serve_once(403, r#"{"error": "denied"}"#).await;
        let store = live_store(&base_url);

        let err = store
            .set(&path("about"), &payload(serde_json::json!({"name": "A"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 403, ref body } if body.contains("denied")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_get_decodes_document() {
        let doc = r#"{"name": "projects/demo/databases/(default)/documents/portfolio/skills",
                      "fields": {"items": {"arrayValue": {}}}}"#;
        let (base_url, server) = serve_once(200, doc).await;
        let store = live_store(&base_url);

        let stored = store.get(&path("skills")).await.unwrap().unwrap();
        assert_eq!(Value::Object(stored), serde_json::json!({"items": []}));

        let request = server.await.unwrap();
        assert_eq!(request.method, "GET");
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (base_url, server) = serve_once(404, r#"{"error": "not found"}"#).await;
        let store = live_store(&base_url);

        assert!(store.get(&path("references")).await.unwrap().is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_get_maps_error_status() {
        let (base_url, server) = serve_once(500, "oops").await;
        let store = live_store(&base_url);

        let err = store.get(&path("about")).await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 500, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_token_is_not_sent() {
        // Nothing listens here; the request must never be attempted.
        let token = AccessToken::new(
            "stale",
            OffsetDateTime::now_utc() - time::Duration::minutes(1),
        );
        let store = FirestoreStore::new(Client::new(), "http://127.0.0.1:9", "demo", token);

        let err = store
            .set(&path("about"), &payload(serde_json::json!({"name": "A"})))
            .await
            .unwrap_err();
        assert!(err.is_authentication());

        let err = store.get(&path("about")).await.unwrap_err();
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn test_unrepresentable_payload_is_not_sent() {
        let store = live_store("http://127.0.0.1:9");
        let err = store
            .set(&path("about"), &payload(serde_json::json!({"id": u64::MAX})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable(_)));
    }

    #[tokio::test]
    async fn test_in_memory_set_replaces() {
        let store = InMemoryStore::new();
        let about = path("about");

        store
            .set(&about, &payload(serde_json::json!({"name": "A", "email": "a@x"})))
            .await
            .unwrap();
        store
            .set(&about, &payload(serde_json::json!({"name": "B"})))
            .await
            .unwrap();

        let stored = store.get(&about).await.unwrap().unwrap();
        assert_eq!(Value::Object(stored), serde_json::json!({"name": "B"}));
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_in_memory_injected_failure() {
        let store = InMemoryStore::new();
        store.fail_writes(true);

        let err = store
            .set(&path("skills"), &payload(serde_json::json!({"items": []})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Injected(_)));
        assert!(store.is_empty().await);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_missing_document() {
        let store = InMemoryStore::new();
        assert!(store.get(&path("references")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_arc_dyn_store() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());
        store
            .set(&path("about"), &payload(serde_json::json!({"name": "A"})))
            .await
            .unwrap();
        assert!(store.get(&path("about")).await.unwrap().is_some());
    }
}
