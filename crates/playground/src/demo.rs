use std::io::Write;

use anyhow::Context;
use rust_decimal::Decimal;

use solid_core::InvoiceId;
use solid_infra::{InvalidResponseSource, Outcome, PersistError, fetch_or_fallback};
use solid_interaction::{DoubleTap, FullGestureButton, Gesture, LongPress, Tap, TapOnlyButton};
use solid_invoicing::{Invoice, InvoiceReporter, TracingReporter, WriterReporter};
use solid_products::Product;

use crate::config::PlaygroundConfig;

/// Prices of the sample invoice's products.
pub const SAMPLE_PRICES: [u32; 3] = [120, 140, 130];

/// What a playground run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub invoice_id: InvoiceId,
    pub total: Decimal,
    pub report: String,
    pub persisted: Result<(), PersistError>,
    pub gestures: Vec<Gesture>,
    pub response: Outcome,
}

pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRICES
        .into_iter()
        .map(|p| Product::new(Decimal::from(p)))
        .collect()
}

fn press<T: Tap>(control: &T) -> Gesture {
    control.tap()
}

/// Run the walkthrough, writing the invoice report to `out`.
///
/// The discount comes from outside, so it goes through the hardened invoice
/// constructor. A persistence failure is recorded in the summary, not raised.
pub fn run<W: Write>(config: &PlaygroundConfig, out: W) -> anyhow::Result<Summary> {
    let invoice = Invoice::try_new(sample_products(), config.discount)
        .context("cannot build sample invoice")?;

    let mut reporter = WriterReporter::new(out);
    let report = reporter.report(&invoice);
    TracingReporter.report(&invoice);

    let store = config.store.build();
    let persisted = store.persist(&invoice);
    match &persisted {
        Ok(()) => tracing::info!(
            invoice_id = %invoice.id_typed(),
            backend = store.backend(),
            "invoice persisted"
        ),
        Err(err) => tracing::warn!(
            invoice_id = %invoice.id_typed(),
            backend = store.backend(),
            error = %err,
            "invoice not persisted"
        ),
    }

    let full = FullGestureButton::new("camera");
    let single = TapOnlyButton::new("submit");
    let gestures = vec![
        press(&full),
        full.double_tap(),
        full.long_press(),
        press(&single),
    ];

    let response = fetch_or_fallback(&InvalidResponseSource);

    Ok(Summary {
        invoice_id: invoice.id_typed(),
        total: invoice.total(),
        report,
        persisted,
        gestures,
        response,
    })
}
