//! The fixed content of the portfolio collection.
//!
//! Each [`SeedTarget`] names one document and builds its payload:
//! - [`SeedTarget::About`]: flat contact fields
//! - [`SeedTarget::Skills`], [`SeedTarget::Experience`], [`SeedTarget::Certifications`],
//!   [`SeedTarget::References`], [`SeedTarget::Conference`]: `{ items: [...] }` lists

pub mod about;
pub mod certifications;
pub mod conference;
pub mod experience;
pub mod references;
pub mod skills;

use std::fmt;

use clap::ValueEnum;
use portfolio::models::{DocumentKey, DocumentPath, PortfolioDocument};

pub use about::about;
pub use certifications::certifications;
pub use conference::conference_program;
pub use experience::experience;
pub use references::references;
pub use skills::skills;

use crate::db::{SeedError, to_payload};

/// One seedable document of the portfolio collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SeedTarget {
    About,
    Skills,
    Experience,
    Certifications,
    References,
    Conference,
}

impl SeedTarget {
    /// Every target, in the order they are seeded.
    pub const ALL: [SeedTarget; 6] = [
        SeedTarget::About,
        SeedTarget::Skills,
        SeedTarget::Experience,
        SeedTarget::Certifications,
        SeedTarget::References,
        SeedTarget::Conference,
    ];

    /// Document key within the collection.
    pub fn key(self) -> &'static str {
        match self {
            SeedTarget::About => "about",
            SeedTarget::Skills => "skills",
            SeedTarget::Experience => "experience",
            SeedTarget::Certifications => "certifications",
            SeedTarget::References => "references",
            SeedTarget::Conference => "conferenceProgram",
        }
    }

    /// Noun phrase used in operator messages.
    pub fn noun(self) -> &'static str {
        match self {
            SeedTarget::About => "About information",
            SeedTarget::Skills => "Skills",
            SeedTarget::Experience => "Experience",
            SeedTarget::Certifications => "Certifications",
            SeedTarget::References => "References",
            SeedTarget::Conference => "Conference program",
        }
    }

    pub fn payload(self) -> Result<portfolio::Payload, SeedError> {
        match self {
            SeedTarget::About => to_payload(&about()),
            SeedTarget::Skills => to_payload(&skills()),
            SeedTarget::Experience => to_payload(&experience()),
            SeedTarget::Certifications => to_payload(&certifications()),
            SeedTarget::References => to_payload(&references()),
            SeedTarget::Conference => to_payload(&conference_program()),
        }
    }

    /// Builds the full document addressed inside `collection`.
    pub fn document(self, collection: &str) -> Result<PortfolioDocument, SeedError> {
        let path = DocumentPath::new(collection, DocumentKey::new(self.key())?)?;
        Ok(PortfolioDocument {
            path,
            payload: self.payload()?,
        })
    }
}

impl fmt::Display for SeedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_valid() {
        let keys: HashSet<_> = SeedTarget::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), SeedTarget::ALL.len());
        for target in SeedTarget::ALL {
            assert!(DocumentKey::new(target.key()).is_ok(), "{target:?}");
        }
    }

    #[test]
    fn test_every_payload_is_an_object() {
        for target in SeedTarget::ALL {
            let payload = target.payload().unwrap();
            assert!(!payload.is_empty(), "{target:?} has an empty payload");
        }
    }

    #[test]
    fn test_list_payloads_wrap_items() {
        for target in &SeedTarget::ALL[1..] {
            let payload = target.payload().unwrap();
            let items = payload["items"].as_array().unwrap();
            assert!(!items.is_empty(), "{target:?}");
            assert_eq!(payload.len(), 1);
        }
    }

    #[test]
    fn test_about_is_flat() {
        let payload = SeedTarget::About.payload().unwrap();
        assert!(payload.values().all(|v| v.is_string()));
        assert!(payload.contains_key("email"));
    }

    #[test]
    fn test_document_path() {
        let doc = SeedTarget::Certifications.document("portfolio").unwrap();
        assert_eq!(doc.path.to_string(), "portfolio/certifications");
        assert!(SeedTarget::Skills.document("").is_err());
    }

    #[test]
    fn test_value_enum_names() {
        let parsed = SeedTarget::from_str("conference", true).unwrap();
        assert_eq!(parsed, SeedTarget::Conference);
        assert_eq!(parsed.key(), "conferenceProgram");
    }
}
