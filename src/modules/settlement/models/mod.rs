use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::Recipient;

/// Credit usage extracted from one booked invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRecord {
    pub invoice_number: i64,

    /// Billed party, carried through to the rendered report
    pub recipient: Recipient,

    /// Sum of the quantities on the invoice's credit lines
    pub credit_quantity: Decimal,
}

/// Revenue split computed for one credit record
///
/// The two shares always sum to the record's credit quantity exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub record: CreditRecord,
    pub photographer_share: Decimal,
    pub platform_share: Decimal,
}

impl SplitResult {
    pub fn invoice_number(&self) -> i64 {
        self.record.invoice_number
    }

    pub fn credit_quantity(&self) -> Decimal {
        self.record.credit_quantity
    }
}
