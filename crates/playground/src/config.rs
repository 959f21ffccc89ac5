use anyhow::Context;
use rust_decimal::Decimal;

use solid_infra::StoreKind;

/// Environment variable selecting the invoice persistence backend.
pub const STORE_ENV: &str = "SOLID_INVOICE_STORE";
/// Environment variable holding the discount percentage applied to the sample invoice.
pub const DISCOUNT_ENV: &str = "SOLID_DISCOUNT";

const DEFAULT_DISCOUNT_PERCENT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    pub store: StoreKind,
    pub discount: Decimal,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            discount: Decimal::from(DEFAULT_DISCOUNT_PERCENT),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    ///
    /// An unknown store falls back to the default with a warning; a discount
    /// that is not a decimal number is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let store = match lookup(STORE_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    error = %err,
                    fallback = %defaults.store,
                    "{STORE_ENV} not recognised; using default store"
                );
                defaults.store
            }),
            None => defaults.store,
        };

        let discount = match lookup(DISCOUNT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<Decimal>()
                .with_context(|| format!("{DISCOUNT_ENV} must be a decimal number (got '{raw}')"))?,
            None => defaults.discount,
        };

        Ok(Self { store, discount })
    }
}
