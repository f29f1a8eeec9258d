// Reports module: period report assembly and PDF rendering

pub mod models;
pub mod services;

pub use models::SettlementReport;
pub use services::{PdfRenderer, ReportRenderer};
