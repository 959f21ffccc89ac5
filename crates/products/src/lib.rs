//! Products domain module.
//!
//! A product is an immutable priced line item, implemented purely as
//! deterministic domain logic (no IO, no output, no storage).

pub mod product;

pub use product::Product;
