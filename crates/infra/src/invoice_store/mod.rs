//! Invoice persistence boundary.
//!
//! Defines the [`InvoiceStore`] capability and a set of interchangeable
//! backends. Callers pick a backend through [`StoreKind`] and only ever talk
//! to the trait.

pub mod document;
pub mod null;
pub mod relational;
pub mod r#trait;

use core::str::FromStr;

use solid_core::DomainError;

pub use document::{DocumentStore, InvoiceDocument};
pub use null::{NullStore, OfflineStore};
pub use r#trait::{InvoiceStore, PersistError};
pub use relational::{InvoiceLineRow, InvoiceRow, RelationalStore};

/// Selectable persistence backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Document,
    Relational,
    Null,
    Offline,
}

impl StoreKind {
    pub const ALL: [StoreKind; 4] = [
        StoreKind::Document,
        StoreKind::Relational,
        StoreKind::Null,
        StoreKind::Offline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Document => "document",
            StoreKind::Relational => "relational",
            StoreKind::Null => "null",
            StoreKind::Offline => "offline",
        }
    }

    /// Build a fresh, empty backend of this kind.
    pub fn build(self) -> Box<dyn InvoiceStore> {
        match self {
            StoreKind::Document => Box::new(DocumentStore::new()),
            StoreKind::Relational => Box::new(RelationalStore::new()),
            StoreKind::Null => Box::new(NullStore),
            StoreKind::Offline => Box::new(OfflineStore::default()),
        }
    }
}

impl core::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        StoreKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown invoice store '{s}' (expected one of: document, relational, null, offline)"
                ))
            })
    }
}
