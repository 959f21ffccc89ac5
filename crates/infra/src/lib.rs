//! Infrastructure layer: invoice persistence backends and response sources.

pub mod invoice_store;
pub mod response;

pub use invoice_store::{
    DocumentStore, InvoiceStore, NullStore, OfflineStore, PersistError, RelationalStore,
    StoreKind,
};
pub use response::{
    InvalidResponseSource, Outcome, Response, ResponseError, ResponseSource,
    StaticResponseSource, fetch_or_fallback,
};
