use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solid_core::{DomainError, DomainResult, ValueObject};

/// Priced line item.
///
/// Immutable once constructed. Cloning is cheap, so the same product can be
/// placed on several invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    price: Decimal,
}

impl Product {
    /// Permissive constructor: any price is accepted, including negative ones.
    pub fn new(price: Decimal) -> Self {
        Self { price }
    }

    /// Hardened constructor: rejects negative prices.
    pub fn try_new(price: Decimal) -> DomainResult<Self> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "product price must not be negative (got {price})"
            )));
        }
        Ok(Self::new(price))
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl ValueObject for Product {}

impl From<Decimal> for Product {
    fn from(price: Decimal) -> Self {
        Self::new(price)
    }
}
