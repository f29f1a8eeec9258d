// Invoices module: wire models and client for the accounting API

pub mod models;
pub mod services;

pub use models::{InvoiceDetail, InvoiceLine, InvoicePage, InvoiceSummary, Pagination, Recipient};
pub use services::{fetch_all_summaries, BookedInvoiceSource, EconomicClient};
