//! `solid-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no output, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::InvoiceId;
pub use money::{MONEY_SCALE, format_money, round_money};
pub use value_object::ValueObject;
