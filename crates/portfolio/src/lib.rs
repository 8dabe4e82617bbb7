pub mod credentials;
pub mod document_store;
pub mod errors;
pub mod firestore_value;
pub mod models;

#[cfg(test)]
mod test_support;

pub use crate::{
    credentials::{AccessToken, AuthError, ServiceAccountKey},
    document_store::{DocumentStore, FirestoreStore, InMemoryStore},
    errors::StoreError,
    models::{DocumentKey, DocumentPath, PORTFOLIO_COLLECTION, Payload, PortfolioDocument},
};
