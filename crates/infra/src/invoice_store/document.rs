use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use solid_core::InvoiceId;
use solid_invoicing::Invoice;
use solid_products::Product;

use super::r#trait::{InvoiceStore, PersistError};

/// Self-contained JSON document describing one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub id: InvoiceId,
    pub products: Vec<Product>,
    pub discount_percentage: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub stored_at: DateTime<Utc>,
}

impl InvoiceDocument {
    pub fn from_invoice(invoice: &Invoice, stored_at: DateTime<Utc>) -> Self {
        Self {
            id: invoice.id_typed(),
            products: invoice.products().to_vec(),
            discount_percentage: invoice.discount_percentage(),
            subtotal: invoice.subtotal(),
            total: invoice.total(),
            stored_at,
        }
    }
}

/// Document-oriented backend: one JSON document per invoice, keyed by id.
///
/// Documents are kept in memory. Writing the same invoice id twice is rejected.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<InvoiceId, JsonValue>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored document for `id`, if any.
    pub fn document(&self, id: InvoiceId) -> Result<Option<JsonValue>, PersistError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;
        Ok(documents.get(&id).cloned())
    }

    /// Stored document for `id`, decoded.
    pub fn load(&self, id: InvoiceId) -> Result<Option<InvoiceDocument>, PersistError> {
        self.document(id)?
            .map(|doc| {
                serde_json::from_value(doc)
                    .map_err(|e| PersistError::ConnectionFailed(format!("corrupt document: {e}")))
            })
            .transpose()
    }

    pub fn len(&self) -> Result<usize, PersistError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> Result<bool, PersistError> {
        Ok(self.len()? == 0)
    }
}

impl InvoiceStore for DocumentStore {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError> {
        let id = invoice.id_typed();
        let document = serde_json::to_value(InvoiceDocument::from_invoice(invoice, Utc::now()))
            .map_err(|e| PersistError::WriteRejected(format!("unserializable invoice: {e}")))?;

        let mut documents = self
            .documents
            .write()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;

        if documents.contains_key(&id) {
            return Err(PersistError::WriteRejected(format!(
                "document {id} already exists"
            )));
        }
        documents.insert(id, document);

        tracing::debug!(invoice_id = %id, "invoice document stored");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "document"
    }
}
