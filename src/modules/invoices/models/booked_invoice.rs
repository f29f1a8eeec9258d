use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One page of the booked-invoice list endpoint (`GET /invoices/booked`)
///
/// The accounting API returns the list in pages; `pagination.next_page`
/// carries the absolute URL of the following page until the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePage {
    /// Invoice summaries on this page, in API order
    #[serde(default)]
    pub collection: Vec<InvoiceSummary>,

    /// Paging block; absent on an empty result set
    pub pagination: Option<Pagination>,
}

/// Paging block attached to a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Entries per page as requested via the `pagesize` query parameter
    #[serde(default)]
    pub page_size: u32,

    /// Total results across all pages
    #[serde(default)]
    pub results: u32,

    #[serde(default)]
    pub first_page: Option<String>,

    /// Absolute URL of the next page; absent on the last page
    #[serde(default)]
    pub next_page: Option<String>,

    #[serde(default)]
    pub last_page: Option<String>,
}

/// One entry of the paginated booked-invoice list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    /// Invoice number, the key for the detail endpoint
    #[serde(rename = "bookedInvoiceNumber")]
    pub invoice_number: i64,
}

/// Full invoice record from `GET /invoices/booked/{number}`
///
/// Immutable once fetched; processed and discarded within a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    #[serde(rename = "bookedInvoiceNumber")]
    pub invoice_number: i64,

    /// Invoice date
    pub date: NaiveDate,

    /// Currency code (e.g. "DKK", "EUR")
    pub currency: String,

    pub net_amount: Decimal,

    pub gross_amount: Decimal,

    pub vat_amount: Decimal,

    /// Invoice lines in position order
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,

    /// Billed party
    pub recipient: Recipient,
}

/// Billed party of an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub zip: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,
}

/// One invoice line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// 1-based line ordinal; the join key to the credit extraction rule
    pub line_number: u32,

    #[serde(default)]
    pub description: String,

    /// Booked quantity; credits when the line sits at the credit ordinal
    #[serde(default)]
    pub quantity: Decimal,
}
