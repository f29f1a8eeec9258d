//! Revenue-split calculation properties
//!
//! The conservation invariant is the load-bearing one: the photographer
//! and platform shares must reconcile to the credit quantity exactly,
//! with no rounding residue, for any percentage in [0, 100].

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shutterledger::core::AppError;
use shutterledger::modules::invoices::models::Recipient;
use shutterledger::modules::settlement::models::CreditRecord;
use shutterledger::modules::settlement::services::RevenueSplitCalculator;

fn record(quantity: Decimal) -> CreditRecord {
    CreditRecord {
        invoice_number: 1001,
        recipient: Recipient {
            name: "Studio North".to_string(),
            address: String::new(),
            zip: String::new(),
            city: String::new(),
            country: String::new(),
        },
        credit_quantity: quantity,
    }
}

#[test]
fn test_forty_credits_at_fifteen_percent() {
    let calculator = RevenueSplitCalculator::new(15).unwrap();
    let split = calculator.split(record(dec!(40))).unwrap();

    assert_eq!(split.record.credit_quantity, dec!(40));
    assert_eq!(split.photographer_share, dec!(6));
    assert_eq!(split.platform_share, dec!(34));
}

#[test]
fn test_zero_quantity_splits_to_zero_shares() {
    let calculator = RevenueSplitCalculator::new(15).unwrap();
    let split = calculator.split(record(Decimal::ZERO)).unwrap();

    assert_eq!(split.photographer_share, Decimal::ZERO);
    assert_eq!(split.platform_share, Decimal::ZERO);
}

#[test]
fn test_negative_quantity_rejected() {
    let calculator = RevenueSplitCalculator::new(15).unwrap();
    let result = calculator.split(record(dec!(-0.01)));
    assert!(matches!(result, Err(AppError::InvalidQuantity(_))));
}

proptest! {
    #[test]
    fn test_shares_always_sum_to_quantity(
        cents in 0i64..100_000_000,
        percent in 0u32..=100,
    ) {
        let quantity = Decimal::new(cents, 2);
        let calculator = RevenueSplitCalculator::new(percent).unwrap();

        let split = calculator.split(record(quantity)).unwrap();
        prop_assert_eq!(
            split.photographer_share + split.platform_share,
            quantity
        );
    }

    #[test]
    fn test_shares_are_non_negative(
        cents in 0i64..100_000_000,
        percent in 0u32..=100,
    ) {
        let quantity = Decimal::new(cents, 2);
        let calculator = RevenueSplitCalculator::new(percent).unwrap();

        let split = calculator.split(record(quantity)).unwrap();
        prop_assert!(split.photographer_share >= Decimal::ZERO);
        prop_assert!(split.platform_share >= Decimal::ZERO);
    }

    #[test]
    fn test_platform_share_tracks_complement_percentage(
        cents in 0i64..100_000_000,
        percent in 0u32..=100,
    ) {
        let quantity = Decimal::new(cents, 2);
        let calculator = RevenueSplitCalculator::new(percent).unwrap();

        let split = calculator.split(record(quantity)).unwrap();

        // platform_share differs from quantity × (100 − P)/100 only by
        // the rounding of the photographer share, which is at most half
        // a cent.
        let exact = quantity * Decimal::from(100 - percent) / Decimal::ONE_HUNDRED;
        let residue = (split.platform_share - exact).abs();
        prop_assert!(residue <= dec!(0.005));
    }

    #[test]
    fn test_split_is_deterministic(
        cents in 0i64..100_000_000,
        percent in 0u32..=100,
    ) {
        let quantity = Decimal::new(cents, 2);
        let calculator = RevenueSplitCalculator::new(percent).unwrap();

        let first = calculator.split(record(quantity)).unwrap();
        let second = calculator.split(record(quantity)).unwrap();
        prop_assert_eq!(first, second);
    }
}
