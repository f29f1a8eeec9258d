use crate::core::{AppError, ReportingPeriod, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;

/// Main application configuration
///
/// Loaded once at process start and passed into the pipeline explicitly;
/// nothing reads the environment after this point.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub economic: EconomicConfig,
    pub settlement: SettlementConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Bounded deadline applied to every outgoing HTTP request
    pub http_timeout_secs: u64,
}

/// Accounting-service access: two pre-issued secret tokens plus paging
#[derive(Debug, Clone, Deserialize)]
pub struct EconomicConfig {
    pub secret_token: String,
    pub agreement_token: String,
    pub base_url: String,
    pub page_size: u32,
}

/// Settlement rules: where the credit line sits and how the split divides
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementConfig {
    /// 1-based invoice line ordinal that records credit usage
    pub credit_line_ordinal: u32,

    /// Photographer percentage of the credit quantity, 0-100
    pub photographer_percent: u32,

    /// Explicit period override; the previous calendar month when absent
    pub period_override: Option<(NaiveDate, NaiveDate)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    pub bucket: String,
    pub slack_webhook_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let period_override = match (env::var("REPORT_FROM"), env::var("REPORT_TO")) {
            (Ok(from), Ok(to)) => Some((
                parse_date("REPORT_FROM", &from)?,
                parse_date("REPORT_TO", &to)?,
            )),
            (Err(_), Err(_)) => None,
            _ => {
                return Err(AppError::Configuration(
                    "REPORT_FROM and REPORT_TO must be set together".to_string(),
                ))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid HTTP_TIMEOUT_SECS".to_string())
                    })?,
            },
            economic: EconomicConfig {
                secret_token: env::var("ECONOMIC_SECRET_TOKEN").map_err(|_| {
                    AppError::Configuration("ECONOMIC_SECRET_TOKEN not set".to_string())
                })?,
                agreement_token: env::var("ECONOMIC_PUBLIC_TOKEN").map_err(|_| {
                    AppError::Configuration("ECONOMIC_PUBLIC_TOKEN not set".to_string())
                })?,
                base_url: env::var("ECONOMIC_BASE_URL")
                    .unwrap_or_else(|_| "https://restapi.e-conomic.com".to_string()),
                page_size: env::var("ECONOMIC_PAGE_SIZE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid ECONOMIC_PAGE_SIZE".to_string())
                    })?,
            },
            settlement: SettlementConfig {
                credit_line_ordinal: env::var("CREDIT_LINE_ORDINAL")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid CREDIT_LINE_ORDINAL".to_string())
                    })?,
                photographer_percent: env::var("PHOTOGRAPHER_SHARE_PERCENT")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid PHOTOGRAPHER_SHARE_PERCENT".to_string())
                    })?,
                period_override,
            },
            delivery: DeliveryConfig {
                bucket: env::var("REPORT_BUCKET")
                    .map_err(|_| AppError::Configuration("REPORT_BUCKET not set".to_string()))?,
                slack_webhook_url: env::var("SLACK_WEBHOOK_URL").map_err(|_| {
                    AppError::Configuration("SLACK_WEBHOOK_URL not set".to_string())
                })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.settlement.credit_line_ordinal == 0 {
            return Err(AppError::Configuration(
                "Credit line ordinal must be greater than 0".to_string(),
            ));
        }

        if self.settlement.photographer_percent > 100 {
            return Err(AppError::Configuration(
                "Photographer share percentage must be within 0-100".to_string(),
            ));
        }

        if self.economic.page_size == 0 || self.economic.page_size > 1000 {
            return Err(AppError::Configuration(
                "Page size must be within 1-1000".to_string(),
            ));
        }

        if self.app.http_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }

        if let Some((from, to)) = self.settlement.period_override {
            if from > to {
                return Err(AppError::Configuration(format!(
                    "REPORT_FROM ({}) must be before or equal to REPORT_TO ({})",
                    from, to
                )));
            }
        }

        Ok(())
    }
}

impl SettlementConfig {
    /// Period for this run: the explicit override when configured, the
    /// month preceding `reference` otherwise
    pub fn reporting_period(&self, reference: NaiveDate) -> Result<ReportingPeriod> {
        match self.period_override {
            Some((from, to)) => ReportingPeriod::new(from, to),
            None => Ok(ReportingPeriod::preceding_month(reference)),
        }
    }
}

fn parse_date(name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Configuration(format!("Invalid {} (expected YYYY-MM-DD): {}", name, value))
    })
}
