//! Writing portfolio documents to a document store.
//!
//! The [`Seeder`] performs one full-document overwrite per call and reports
//! each outcome; [`open_session`] builds the store it writes to.

mod seeder;
mod session;

pub use seeder::{SeedError, SeedReport, Seeder, to_payload};
pub use session::{DryRunStore, open_session};
