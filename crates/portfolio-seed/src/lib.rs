//! Seeding for the portfolio document collection.
//!
//! This crate writes the portfolio's fixed content (about, skills, experience,
//! certifications, references and the conference program) into the hosted
//! document store. Every write replaces the whole document.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use portfolio_seed::prelude::*;
//!
//! let store = open_session(&SeedConfig::default()).await?;
//! let seeder = Seeder::new(store);
//!
//! seeder.seed_target(SeedTarget::Certifications).await?;
//! seeder.seed("news", &ItemList::new(vec!["Paper accepted"])).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod db;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::SeedTarget;
    pub use crate::config::SeedConfig;
    pub use crate::db::{DryRunStore, SeedError, SeedReport, Seeder, open_session};
    pub use portfolio::models::{
        About, Certification, Experience, ItemList, ProgramSession, Reference, Skill,
    };
    pub use portfolio::{DocumentStore, InMemoryStore, PORTFOLIO_COLLECTION};
}
