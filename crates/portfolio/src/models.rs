use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::StoreError;

/// Collection every portfolio document lives under.
pub const PORTFOLIO_COLLECTION: &str = "portfolio";

/// Firestore caps document IDs at 1500 bytes.
const MAX_SEGMENT_BYTES: usize = 1500;

/// A document body: always a JSON object at the top level.
pub type Payload = Map<String, Value>;

fn validate_segment(segment: &str) -> Result<(), StoreError> {
    if segment.is_empty() {
        return Err(StoreError::InvalidKey("must not be empty".to_string()));
    }
    if segment.contains('/') {
        return Err(StoreError::InvalidKey(format!(
            "{segment:?} must not contain '/'"
        )));
    }
    if segment == "." || segment == ".." {
        return Err(StoreError::InvalidKey(format!("{segment:?} is reserved")));
    }
    if segment.len() >= 4 && segment.starts_with("__") && segment.ends_with("__") {
        return Err(StoreError::InvalidKey(format!(
            "{segment:?} matches the reserved __name__ form"
        )));
    }
    if segment.len() > MAX_SEGMENT_BYTES {
        return Err(StoreError::InvalidKey(format!(
            "longer than {MAX_SEGMENT_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Validated identifier of a document within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        validate_segment(&key)?;
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentKey {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<collection>/<key>` address of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    collection: String,
    key: DocumentKey,
}

impl DocumentPath {
    pub fn new(collection: impl Into<String>, key: DocumentKey) -> Result<Self, StoreError> {
        let collection = collection.into();
        validate_segment(&collection)?;
        Ok(Self { collection, key })
    }

    /// Path of `key` inside the fixed `portfolio` collection.
    pub fn portfolio(key: DocumentKey) -> Self {
        Self {
            collection: PORTFOLIO_COLLECTION.to_string(),
            key,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

/// A document together with the address it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    pub path: DocumentPath,
    pub payload: Payload,
}

/// Wrapper payload for documents that hold an ordered list of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Flat contact and biography fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub name: String,
    pub title: String,
    pub affiliation: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub title: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub institution: String,
    pub email: String,
    pub relationship: String,
}

/// One slot of the conference program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSession {
    pub day: String,
    pub time: String,
    pub title: String,
    pub speaker: String,
    pub track: String,
}
