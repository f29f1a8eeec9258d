use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ReportingPeriod;
use crate::modules::settlement::models::SplitResult;

/// Settlement report for one reporting period
///
/// Split results are folded in resolution order, which equals the order
/// of the summary list. Each invoice number appears at most once; a
/// duplicate keeps the first occurrence. Built once per run, handed to
/// the delivery sinks, and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub period: ReportingPeriod,
    pub records: Vec<SplitResult>,
}

impl SettlementReport {
    pub fn new(period: ReportingPeriod) -> Self {
        Self {
            period,
            records: Vec::new(),
        }
    }

    /// Fold one split result into the report, preserving insertion order
    pub fn push(&mut self, result: SplitResult) {
        if self.contains(result.invoice_number()) {
            warn!(
                "Invoice {} already folded into the report, skipping duplicate",
                result.invoice_number()
            );
            return;
        }
        self.records.push(result);
    }

    pub fn contains(&self, invoice_number: i64) -> bool {
        self.records
            .iter()
            .any(|r| r.invoice_number() == invoice_number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total credit quantity across all settled invoices
    pub fn total_credits(&self) -> Decimal {
        self.records.iter().map(|r| r.credit_quantity()).sum()
    }

    pub fn total_photographer_share(&self) -> Decimal {
        self.records.iter().map(|r| r.photographer_share).sum()
    }

    pub fn total_platform_share(&self) -> Decimal {
        self.records.iter().map(|r| r.platform_share).sum()
    }
}
