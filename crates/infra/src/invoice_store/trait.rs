use thiserror::Error;

use solid_invoicing::Invoice;

/// Invoice persistence error.
///
/// These are **infrastructure errors** (connectivity, rejected writes), kept
/// apart from domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Capability to store an invoice.
///
/// Backends are independent types behind this one method. Neither the invoice
/// nor the caller knows which backend is active; swapping one for another
/// changes where the invoice goes, never what it computes.
pub trait InvoiceStore {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError>;

    /// Short backend name used in logs.
    fn backend(&self) -> &'static str;
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for Box<S> {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError> {
        (**self).persist(invoice)
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for &S {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError> {
        (**self).persist(invoice)
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }
}
