//! Invoice reporting collaborators.
//!
//! Rendering is deterministic and separate from output: [`InvoiceReport`]
//! produces the text, an [`InvoiceReporter`] decides where it goes.

use std::io::Write;

use solid_core::format_money;

use crate::invoice::Invoice;

/// Delimiter line framing every report.
pub const REPORT_DELIMITER: &str = "--------";

/// Textual rendering of an invoice.
///
/// ```text
/// --------
/// Invoice id :<id>
/// Total cost :<total>
/// Discounts  :<discount percentage>
/// --------
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceReport;

impl InvoiceReport {
    pub fn render(invoice: &Invoice) -> String {
        format!(
            "{REPORT_DELIMITER}\n\
             Invoice id :{}\n\
             Total cost :{}\n\
             Discounts  :{}\n\
             {REPORT_DELIMITER}\n",
            invoice.id_typed(),
            format_money(invoice.total()),
            invoice.discount_percentage().normalize(),
        )
    }
}

/// A collaborator that renders an invoice and sends it to a sink it owns.
pub trait InvoiceReporter {
    /// Render `invoice`, emit it, and return the rendered text.
    fn report(&mut self, invoice: &Invoice) -> String;
}

/// Writes reports to any [`Write`] sink (stdout, a file, a buffer).
///
/// Write failures are logged and swallowed; reporting never fails.
#[derive(Debug)]
pub struct WriterReporter<W> {
    sink: W,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl WriterReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> InvoiceReporter for WriterReporter<W> {
    fn report(&mut self, invoice: &Invoice) -> String {
        let text = InvoiceReport::render(invoice);
        if let Err(err) = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|_| self.sink.flush())
        {
            tracing::warn!(
                invoice_id = %invoice.id_typed(),
                error = %err,
                "failed to write invoice report"
            );
        }
        text
    }
}

/// Emits reports as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl InvoiceReporter for TracingReporter {
    fn report(&mut self, invoice: &Invoice) -> String {
        let text = InvoiceReport::render(invoice);
        tracing::info!(
            invoice_id = %invoice.id_typed(),
            total = %format_money(invoice.total()),
            discount_percentage = %invoice.discount_percentage().normalize(),
            products = invoice.products().len(),
            "invoice report"
        );
        text
    }
}
