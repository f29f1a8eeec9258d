//! Reporting-period selection and query-predicate derivation
//!
//! Covers the default previous-month computation, explicit overrides,
//! inverted-range rejection, and deterministic predicate derivation.

use chrono::NaiveDate;
use proptest::prelude::*;
use shutterledger::core::{AppError, ReportingPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_explicit_override_keeps_bounds() {
    let period = ReportingPeriod::new(date(2019, 12, 1), date(2019, 12, 31)).unwrap();
    assert_eq!(period.from, date(2019, 12, 1));
    assert_eq!(period.to, date(2019, 12, 31));
}

#[test]
fn test_preceding_month_from_mid_month_reference() {
    let period = ReportingPeriod::preceding_month(date(2026, 8, 5));
    assert_eq!(period.from, date(2026, 7, 1));
    assert_eq!(period.to, date(2026, 7, 31));
}

#[test]
fn test_preceding_month_rolls_over_year_boundary() {
    let period = ReportingPeriod::preceding_month(date(2026, 1, 1));
    assert_eq!(period.from, date(2025, 12, 1));
    assert_eq!(period.to, date(2025, 12, 31));
}

#[test]
fn test_preceding_month_in_leap_year() {
    let period = ReportingPeriod::preceding_month(date(2024, 3, 15));
    assert_eq!(period.to, date(2024, 2, 29));
}

#[test]
fn test_predicate_format_matches_api_contract() {
    let period = ReportingPeriod::new(date(2019, 12, 1), date(2019, 12, 31)).unwrap();
    assert_eq!(
        period.query_predicate(),
        "date$gte:2019-12-01$and:date$lte:2019-12-31"
    );
}

proptest! {
    #[test]
    fn test_valid_ranges_derive_predicate_from_both_bounds(
        y1 in 2000i32..2100, m1 in 1u32..=12, d1 in 1u32..=28,
        y2 in 2000i32..2100, m2 in 1u32..=12, d2 in 1u32..=28,
    ) {
        let a = date(y1, m1, d1);
        let b = date(y2, m2, d2);
        let (from, to) = if a <= b { (a, b) } else { (b, a) };

        let period = ReportingPeriod::new(from, to).unwrap();
        let predicate = period.query_predicate();

        prop_assert_eq!(
            predicate,
            format!("date$gte:{}$and:date$lte:{}", from, to)
        );
    }

    #[test]
    fn test_predicate_is_deterministic(
        y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28,
        span in 0i64..400,
    ) {
        let from = date(y, m, d);
        let to = from + chrono::Duration::days(span);

        let period = ReportingPeriod::new(from, to).unwrap();
        prop_assert_eq!(period.query_predicate(), period.query_predicate());
    }

    #[test]
    fn test_inverted_ranges_always_rejected(
        y1 in 2000i32..2100, m1 in 1u32..=12, d1 in 1u32..=28,
        y2 in 2000i32..2100, m2 in 1u32..=12, d2 in 1u32..=28,
    ) {
        let a = date(y1, m1, d1);
        let b = date(y2, m2, d2);
        prop_assume!(a != b);
        let (from, to) = if a > b { (a, b) } else { (b, a) };

        let result = ReportingPeriod::new(from, to);
        prop_assert!(matches!(result, Err(AppError::InvalidRange(_))));
    }
}
