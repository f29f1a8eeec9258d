mod settlement_report;

pub use settlement_report::SettlementReport;
