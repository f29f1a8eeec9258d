use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::settlement::models::{CreditRecord, SplitResult};

/// Splits an invoice's credit quantity between photographer and platform
///
/// The photographer share is `credit_quantity × P / 100` rounded to two
/// decimal places; the platform share is the remainder taken by
/// subtraction, so the two shares always sum to the credit quantity
/// exactly.
pub struct RevenueSplitCalculator {
    photographer_percent: Decimal,
}

impl RevenueSplitCalculator {
    /// Create a calculator for a photographer percentage in [0, 100]
    pub fn new(photographer_percent: u32) -> Result<Self> {
        if photographer_percent > 100 {
            return Err(AppError::configuration(format!(
                "Photographer share percentage must be within 0-100, got {}",
                photographer_percent
            )));
        }
        Ok(Self {
            photographer_percent: Decimal::from(photographer_percent),
        })
    }

    /// Compute the revenue split for one credit record
    ///
    /// A negative quantity indicates upstream data corruption and fails
    /// with `InvalidQuantity`.
    pub fn split(&self, record: CreditRecord) -> Result<SplitResult> {
        if record.credit_quantity < Decimal::ZERO {
            return Err(AppError::InvalidQuantity(format!(
                "Invoice {} has negative credit quantity {}",
                record.invoice_number, record.credit_quantity
            )));
        }

        let photographer_share = (record.credit_quantity * self.photographer_percent
            / Decimal::ONE_HUNDRED)
            .round_dp(2);
        let platform_share = record.credit_quantity - photographer_share;

        Ok(SplitResult {
            record,
            photographer_share,
            platform_share,
        })
    }
}
