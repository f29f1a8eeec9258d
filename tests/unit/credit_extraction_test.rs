//! Credit-line extraction against the configured line ordinal

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shutterledger::core::AppError;
use shutterledger::modules::invoices::models::{InvoiceDetail, InvoiceLine, Recipient};
use shutterledger::modules::settlement::services::CreditLineExtractor;

fn invoice(invoice_number: i64, lines: Vec<InvoiceLine>) -> InvoiceDetail {
    InvoiceDetail {
        invoice_number,
        date: NaiveDate::from_ymd_opt(2019, 12, 15).unwrap(),
        currency: "DKK".to_string(),
        net_amount: dec!(4000),
        gross_amount: dec!(5000),
        vat_amount: dec!(1000),
        lines,
        recipient: Recipient {
            name: "Studio North".to_string(),
            address: "Main Street 1".to_string(),
            zip: "8000".to_string(),
            city: "Aarhus".to_string(),
            country: "Denmark".to_string(),
        },
    }
}

fn line(number: u32, quantity: Decimal) -> InvoiceLine {
    InvoiceLine {
        line_number: number,
        description: "Credits".to_string(),
        quantity,
    }
}

#[test]
fn test_only_lines_at_configured_ordinal_are_returned() {
    let extractor = CreditLineExtractor::new(2);
    let detail = invoice(
        1001,
        vec![line(1, dec!(1)), line(2, dec!(40)), line(3, dec!(7))],
    );

    let lines = extractor.matching_lines(&detail).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, dec!(40));
}

#[test]
fn test_invoice_with_one_line_cannot_contain_credit_line() {
    let extractor = CreditLineExtractor::new(2);
    let detail = invoice(1002, vec![line(1, dec!(5))]);

    let result = extractor.extract(&detail);
    assert!(matches!(
        result,
        Err(AppError::NoCreditLine {
            invoice: 1002,
            ordinal: 2
        })
    ));
}

#[test]
fn test_lines_at_other_ordinals_only_yield_no_credit_line() {
    let extractor = CreditLineExtractor::new(2);
    // Enough lines, but line numbering skips the configured ordinal
    let detail = invoice(
        1003,
        vec![line(1, dec!(5)), line(3, dec!(10)), line(4, dec!(2))],
    );

    let result = extractor.extract(&detail);
    assert!(matches!(
        result,
        Err(AppError::NoCreditLine {
            invoice: 1003,
            ordinal: 2
        })
    ));
}

#[test]
fn test_reissued_invoice_sums_all_lines_at_ordinal() {
    let extractor = CreditLineExtractor::new(2);
    let detail = invoice(
        1004,
        vec![line(1, dec!(1)), line(2, dec!(25.5)), line(2, dec!(14.5))],
    );

    let record = extractor.extract(&detail).unwrap();
    assert_eq!(record.credit_quantity, dec!(40.0));
}

#[test]
fn test_custom_ordinal_is_honored() {
    let extractor = CreditLineExtractor::new(3);
    let detail = invoice(
        1005,
        vec![line(1, dec!(1)), line(2, dec!(40)), line(3, dec!(7))],
    );

    let record = extractor.extract(&detail).unwrap();
    assert_eq!(record.credit_quantity, dec!(7));
}

#[test]
fn test_extracted_record_carries_recipient() {
    let extractor = CreditLineExtractor::new(2);
    let detail = invoice(1006, vec![line(1, dec!(1)), line(2, dec!(40))]);

    let record = extractor.extract(&detail).unwrap();
    assert_eq!(record.invoice_number, 1006);
    assert_eq!(record.recipient.name, "Studio North");
    assert_eq!(record.recipient.city, "Aarhus");
}
