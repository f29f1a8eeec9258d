pub mod pdf;

pub use pdf::{PdfRenderer, ReportRenderer};
