//! Invoicing domain module.
//!
//! The invoice itself is pure computation (no IO, no output, no storage).
//! Rendering lives in [`report`], a collaborator that consumes an invoice
//! without the invoice knowing about it.

pub mod invoice;
pub mod report;

pub use invoice::Invoice;
pub use report::{
    InvoiceReport, InvoiceReporter, REPORT_DELIMITER, TracingReporter, WriterReporter,
};
