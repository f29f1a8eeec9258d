// Settlement module: credit-line extraction and revenue split

pub mod models;
pub mod services;

pub use models::{CreditRecord, SplitResult};
pub use services::{CreditLineExtractor, RevenueSplitCalculator};
