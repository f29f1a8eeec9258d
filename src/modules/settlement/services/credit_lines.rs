use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceDetail, InvoiceLine};
use crate::modules::settlement::models::CreditRecord;

/// Isolates the credit-bearing lines of a booked invoice
///
/// Credit usage is booked at a fixed 1-based line ordinal
/// (`credit_line_ordinal` in the configuration). An invoice normally
/// carries exactly one line at that ordinal; a re-issued invoice may
/// carry several, which are summed.
pub struct CreditLineExtractor {
    ordinal: u32,
}

impl CreditLineExtractor {
    pub fn new(ordinal: u32) -> Self {
        Self { ordinal }
    }

    /// Lines whose ordinal equals the configured credit ordinal
    ///
    /// An invoice with fewer lines than the ordinal cannot contain a
    /// credit line; that case and an invoice with lines only at other
    /// ordinals both fail with `NoCreditLine`.
    pub fn matching_lines<'a>(&self, invoice: &'a InvoiceDetail) -> Result<Vec<&'a InvoiceLine>> {
        if (invoice.lines.len() as u32) < self.ordinal {
            return Err(AppError::NoCreditLine {
                invoice: invoice.invoice_number,
                ordinal: self.ordinal,
            });
        }

        let lines: Vec<&InvoiceLine> = invoice
            .lines
            .iter()
            .filter(|line| line.line_number == self.ordinal)
            .collect();

        if lines.is_empty() {
            return Err(AppError::NoCreditLine {
                invoice: invoice.invoice_number,
                ordinal: self.ordinal,
            });
        }

        Ok(lines)
    }

    /// Extract the aggregated credit usage from one invoice
    pub fn extract(&self, invoice: &InvoiceDetail) -> Result<CreditRecord> {
        let lines = self.matching_lines(invoice)?;
        let credit_quantity: Decimal = lines.iter().map(|line| line.quantity).sum();

        debug!(
            "Invoice {}: {} credit line(s) at position {}, quantity {}",
            invoice.invoice_number,
            lines.len(),
            self.ordinal,
            credit_quantity
        );

        Ok(CreditRecord {
            invoice_number: invoice.invoice_number,
            recipient: invoice.recipient.clone(),
            credit_quantity,
        })
    }
}
