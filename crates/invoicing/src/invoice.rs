use rust_decimal::Decimal;

use solid_core::{DomainError, DomainResult, Entity, InvoiceId, round_money};
use solid_products::Product;

/// Aggregate root: Invoice.
///
/// Holds a fixed list of products and a discount percentage. Every derived
/// amount is recomputed from those on each call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    products: Vec<Product>,
    discount_percentage: Decimal,
}

impl Invoice {
    /// Create an invoice without a discount. A fresh id is generated.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_discount(products, Decimal::ZERO)
    }

    /// Create an invoice with a discount percentage.
    ///
    /// Permissive: the discount is expected in `0..=100` but is not checked,
    /// and product prices are taken as given.
    pub fn with_discount(products: Vec<Product>, discount_percentage: Decimal) -> Self {
        Self {
            id: InvoiceId::new(),
            products,
            discount_percentage,
        }
    }

    /// Hardened constructor: rejects a discount outside `0..=100`.
    pub fn try_new(products: Vec<Product>, discount_percentage: Decimal) -> DomainResult<Self> {
        if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(format!(
                "discount percentage must be within 0..=100 (got {discount_percentage})"
            )));
        }
        Ok(Self::with_discount(products, discount_percentage))
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn discount_percentage(&self) -> Decimal {
        self.discount_percentage
    }

    /// Sum of all product prices, or `None` if it does not fit in a `Decimal`.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.products
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.price()))
    }

    /// Sum of all product prices, before discount.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` when the exact sum is not
    /// representable.
    pub fn subtotal(&self) -> Decimal {
        self.checked_subtotal().unwrap_or_else(|| {
            self.products
                .iter()
                .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.price()))
        })
    }

    /// `discount_percentage / 100`. Dividing first keeps `subtotal * rate`
    /// within range whenever the discounted amount itself is.
    fn discount_rate(&self) -> Decimal {
        self.discount_percentage / Decimal::ONE_HUNDRED
    }

    /// `subtotal * discount_percentage / 100`, unrounded. Saturates like
    /// [`Invoice::subtotal`].
    pub fn discount_amount(&self) -> Decimal {
        self.checked_subtotal()
            .and_then(|subtotal| subtotal.checked_mul(self.discount_rate()))
            .unwrap_or_else(|| self.subtotal().saturating_mul(self.discount_rate()))
    }

    /// Discounted total rounded to cents, or `None` if any intermediate
    /// amount is not representable.
    pub fn checked_total(&self) -> Option<Decimal> {
        let factor = Decimal::ONE.checked_sub(self.discount_rate())?;
        self.checked_subtotal()?
            .checked_mul(factor)
            .map(round_money)
    }

    /// Discounted total, rounded to cents.
    ///
    /// Never panics: when [`Invoice::checked_total`] is `None` the result is
    /// computed from the saturated subtotal and saturates as well.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or_else(|| {
            let factor = Decimal::ONE.saturating_sub(self.discount_rate());
            round_money(self.subtotal().saturating_mul(factor))
        })
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn products(prices: &[Decimal]) -> Vec<Product> {
        prices.iter().copied().map(Product::new).collect()
    }

    fn sample_products() -> Vec<Product> {
        products(&[dec!(120), dec!(140), dec!(130)])
    }

    #[test]
    fn discounted_total_of_sample_invoice() {
        let invoice = Invoice::with_discount(sample_products(), dec!(20));
        assert_eq!(invoice.subtotal(), dec!(390));
        assert_eq!(invoice.discount_amount(), dec!(78));
        assert_eq!(invoice.total(), dec!(312.0));
    }

    #[test]
    fn no_discount_total_is_the_sum() {
        let invoice = Invoice::new(sample_products());
        assert_eq!(invoice.discount_percentage(), Decimal::ZERO);
        assert_eq!(invoice.total(), dec!(390.0));
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let invoice = Invoice::with_discount(Vec::new(), dec!(50));
        assert_eq!(invoice.total(), Decimal::ZERO);
    }

    #[test]
    fn total_is_rounded_to_cents() {
        // 10.00 * (1 - 33.333/100) = 6.6667
        let invoice = Invoice::with_discount(products(&[dec!(10)]), dec!(33.333));
        assert_eq!(invoice.total(), dec!(6.67));
    }

    #[test]
    fn identical_inputs_get_distinct_ids() {
        let a = Invoice::with_discount(sample_products(), dec!(20));
        let b = Invoice::with_discount(sample_products(), dec!(20));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn product_can_be_shared_between_invoices() {
        let shared = Product::new(dec!(99.95));
        let a = Invoice::new(vec![shared.clone()]);
        let b = Invoice::with_discount(vec![shared.clone(), shared], dec!(10));
        assert_eq!(a.total(), dec!(99.95));
        assert_eq!(b.total(), dec!(179.91));
    }

    #[test]
    fn permissive_constructor_accepts_out_of_range_values() {
        let over = Invoice::with_discount(products(&[dec!(100)]), dec!(150));
        assert_eq!(over.total(), dec!(-50));

        let negative = Invoice::with_discount(products(&[dec!(-20), dec!(50)]), dec!(0));
        assert_eq!(negative.total(), dec!(30));
    }

    #[test]
    fn hardened_constructor_rejects_out_of_range_discount() {
        for discount in [dec!(-1), dec!(100.01)] {
            let err = Invoice::try_new(sample_products(), discount).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("0..=100") => {}
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn hardened_constructor_accepts_bounds() {
        let full = Invoice::try_new(sample_products(), dec!(100)).unwrap();
        assert_eq!(full.total(), Decimal::ZERO);
        let none = Invoice::try_new(sample_products(), dec!(0)).unwrap();
        assert_eq!(none.total(), dec!(390));
    }

    #[test]
    fn full_discount_of_near_max_amount_is_zero() {
        let invoice = Invoice::with_discount(
            vec![Product::new(dec!(1000000000000000000000000000))],
            dec!(100),
        );
        assert_eq!(invoice.checked_total(), Some(Decimal::ZERO));
        assert_eq!(invoice.total(), Decimal::ZERO);
        assert_eq!(invoice.discount_amount(), dec!(1000000000000000000000000000));
    }

    #[test]
    fn unrepresentable_subtotal_saturates() {
        let invoice = Invoice::new(vec![Product::new(Decimal::MAX); 2]);
        assert_eq!(invoice.checked_subtotal(), None);
        assert_eq!(invoice.checked_total(), None);
        assert_eq!(invoice.subtotal(), Decimal::MAX);
        assert_eq!(invoice.total(), Decimal::MAX);

        let discounted = Invoice::with_discount(vec![Product::new(Decimal::MAX); 2], dec!(50));
        assert_eq!(discounted.total(), round_money(Decimal::MAX * dec!(0.5)));
    }

    #[test]
    fn unrepresentable_negative_subtotal_saturates_low() {
        let invoice = Invoice::new(vec![Product::new(Decimal::MIN); 3]);
        assert_eq!(invoice.checked_total(), None);
        assert_eq!(invoice.total(), Decimal::MIN);
    }

    #[test]
    fn out_of_range_discount_on_max_amount_saturates() {
        let invoice = Invoice::with_discount(vec![Product::new(Decimal::MAX)], dec!(-100));
        assert_eq!(invoice.checked_total(), None);
        assert_eq!(invoice.total(), Decimal::MAX);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn cents() -> impl Strategy<Value = Vec<Decimal>> {
            prop::collection::vec(0i64..10_000_000i64, 0..20)
                .prop_map(|v| v.into_iter().map(|c| Decimal::new(c, 2)).collect())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: total = sum * (1 - d/100), rounded to cents.
            #[test]
            fn total_matches_closed_form(prices in cents(), d in 0u32..=100u32) {
                let d = Decimal::from(d);
                let sum: Decimal = prices.iter().copied().sum();
                let invoice = Invoice::with_discount(products(&prices), d);
                let expected = round_money(sum * (Decimal::ONE - d / Decimal::ONE_HUNDRED));
                prop_assert_eq!(invoice.total(), expected);
            }

            /// Property: zero discount leaves the sum untouched.
            #[test]
            fn zero_discount_is_identity(prices in cents()) {
                let sum: Decimal = prices.iter().copied().sum();
                let invoice = Invoice::new(products(&prices));
                prop_assert_eq!(invoice.total(), sum);
            }

            /// Property: an empty invoice totals zero whatever the discount.
            #[test]
            fn empty_invoice_is_zero(d in -500i64..500i64) {
                let invoice = Invoice::with_discount(Vec::new(), Decimal::new(d, 1));
                prop_assert_eq!(invoice.total(), Decimal::ZERO);
            }

            /// Property: invoices built from the same products each follow their
            /// own discount; building one does not affect the other.
            #[test]
            fn shared_products_follow_each_invoice_discount(
                prices in cents(),
                d1 in 0u32..=100u32,
                d2 in 0u32..=100u32
            ) {
                let shared = products(&prices);
                let a = Invoice::with_discount(shared.clone(), Decimal::from(d1));
                let total_a = a.total();
                let b = Invoice::with_discount(shared, Decimal::from(d2));

                let sum: Decimal = prices.iter().copied().sum();
                prop_assert_eq!(a.subtotal(), b.subtotal());
                prop_assert_eq!(a.total(), total_a);
                prop_assert_eq!(
                    b.total(),
                    round_money(sum * (Decimal::ONE - Decimal::from(d2) / Decimal::ONE_HUNDRED))
                );
            }
        }

        /// Non-negative amounts up to `Decimal::MAX / 2`.
        fn large_amount() -> impl Strategy<Value = Decimal> {
            (any::<u32>(), any::<u32>(), 0u32..=u32::MAX / 2)
                .prop_map(|(lo, mid, hi)| Decimal::from_parts(lo, mid, hi, false, 0))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a full discount zeroes any invoice, even one whose
            /// subtotal is not representable.
            #[test]
            fn full_discount_of_large_amounts_is_zero(
                prices in prop::collection::vec(large_amount(), 0..6)
            ) {
                let invoice = Invoice::with_discount(products(&prices), Decimal::ONE_HUNDRED);
                prop_assert_eq!(invoice.total(), Decimal::ZERO);
            }

            /// Property: two large lines always fit, so the checked total is
            /// defined and agrees with `total()` for any discount in range.
            #[test]
            fn two_large_lines_have_a_checked_total(
                a in large_amount(),
                b in large_amount(),
                d in 0u32..=100u32
            ) {
                let invoice = Invoice::with_discount(products(&[a, b]), Decimal::from(d));
                let checked = invoice.checked_total();
                prop_assert!(checked.is_some());
                prop_assert_eq!(checked, Some(invoice.total()));
                prop_assert!(invoice.total() <= invoice.subtotal());
            }

            /// Property: `total()` is defined for any number of large lines.
            #[test]
            fn total_of_many_large_lines_does_not_panic(
                prices in prop::collection::vec(large_amount(), 0..8),
                d in 0u32..=100u32
            ) {
                let invoice = Invoice::with_discount(products(&prices), Decimal::from(d));
                prop_assert!(invoice.total() >= Decimal::ZERO);
            }
        }
    }
}
