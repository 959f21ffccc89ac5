//! Money rounding and formatting.
//!
//! Amounts are exact decimals. Computed totals are rounded to two fractional
//! digits with midpoints rounded away from zero, and rendered with exactly two
//! fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept for money amounts.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to [`MONEY_SCALE`] digits (midpoint away from zero).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly [`MONEY_SCALE`] fractional digits.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}
