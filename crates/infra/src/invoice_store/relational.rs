use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use solid_core::InvoiceId;
use solid_invoicing::Invoice;

use super::r#trait::{InvoiceStore, PersistError};

/// Header row of the `invoices` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRow {
    pub invoice_id: InvoiceId,
    pub discount_percentage: Decimal,
    pub total: Decimal,
    pub stored_at: DateTime<Utc>,
}

/// Row of the `invoice_lines` table (one per product).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLineRow {
    pub invoice_id: InvoiceId,
    /// 1-based position of the product on the invoice.
    pub line_no: u32,
    pub price: Decimal,
}

#[derive(Debug, Default)]
struct Tables {
    invoices: HashMap<InvoiceId, InvoiceRow>,
    invoice_lines: Vec<InvoiceLineRow>,
}

/// Relational backend: a header row per invoice plus normalized line rows.
///
/// Tables are kept in memory. The header's primary key is the invoice id; a
/// duplicate key rejects the whole write and no line rows are inserted.
#[derive(Debug, Default)]
pub struct RelationalStore {
    tables: RwLock<Tables>,
}

impl RelationalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, id: InvoiceId) -> Result<Option<InvoiceRow>, PersistError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;
        Ok(tables.invoices.get(&id).cloned())
    }

    /// Line rows for `id`, ordered by `line_no`.
    pub fn lines(&self, id: InvoiceId) -> Result<Vec<InvoiceLineRow>, PersistError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;
        let mut rows: Vec<InvoiceLineRow> = tables
            .invoice_lines
            .iter()
            .filter(|row| row.invoice_id == id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.line_no);
        Ok(rows)
    }

    /// Number of stored invoices.
    pub fn len(&self) -> Result<usize, PersistError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;
        Ok(tables.invoices.len())
    }

    pub fn is_empty(&self) -> Result<bool, PersistError> {
        Ok(self.len()? == 0)
    }
}

impl InvoiceStore for RelationalStore {
    fn persist(&self, invoice: &Invoice) -> Result<(), PersistError> {
        let id = invoice.id_typed();
        let line_count = u32::try_from(invoice.products().len())
            .map_err(|_| PersistError::WriteRejected("too many invoice lines".to_string()))?;

        let mut tables = self
            .tables
            .write()
            .map_err(|_| PersistError::ConnectionFailed("lock poisoned".to_string()))?;

        if tables.invoices.contains_key(&id) {
            return Err(PersistError::WriteRejected(format!(
                "duplicate primary key invoices.invoice_id = {id}"
            )));
        }

        tables.invoices.insert(
            id,
            InvoiceRow {
                invoice_id: id,
                discount_percentage: invoice.discount_percentage(),
                total: invoice.total(),
                stored_at: Utc::now(),
            },
        );
        tables
            .invoice_lines
            .extend((1..=line_count).zip(invoice.products()).map(|(line_no, product)| {
                InvoiceLineRow {
                    invoice_id: id,
                    line_no,
                    price: product.price(),
                }
            }));

        tracing::debug!(invoice_id = %id, lines = line_count, "invoice rows inserted");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "relational"
    }
}
