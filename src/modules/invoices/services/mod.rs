pub mod economic;

pub use economic::{fetch_all_summaries, BookedInvoiceSource, EconomicClient};
