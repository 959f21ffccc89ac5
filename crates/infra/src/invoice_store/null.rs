use solid_invoicing::Invoice;

use super::r#trait::{InvoiceStore, PersistError};

/// Accepts every invoice and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl InvoiceStore for NullStore {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError> {
        tracing::debug!(invoice_id = %invoice.id_typed(), "invoice discarded");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "null"
    }
}

/// A backend whose connection is always down.
#[derive(Debug, Clone)]
pub struct OfflineStore {
    reason: String,
}

impl OfflineStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for OfflineStore {
    fn default() -> Self {
        Self::new("backend unreachable")
    }
}

impl InvoiceStore for OfflineStore {
    fn persist(&self, _invoice: &Invoice) -> Result<(), PersistError> {
        Err(PersistError::ConnectionFailed(self.reason.clone()))
    }

    fn backend(&self) -> &'static str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_store_accepts_repeated_writes() {
        let invoice = Invoice::new(Vec::new());
        assert_eq!(NullStore.persist(&invoice), Ok(()));
        assert_eq!(NullStore.persist(&invoice), Ok(()));
    }

    #[test]
    fn offline_store_reports_connection_failure() {
        let store = OfflineStore::new("db down");
        assert_eq!(
            store.persist(&Invoice::new(Vec::new())),
            Err(PersistError::ConnectionFailed("db down".to_string()))
        );
    }
}
