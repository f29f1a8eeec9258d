use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::EconomicConfig;
use crate::core::{AppError, ReportingPeriod, Result};
use crate::modules::invoices::models::{InvoiceDetail, InvoicePage, InvoiceSummary};

/// Source of booked invoices for a reporting period
///
/// Seam between the pipeline and the accounting API; integration tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait BookedInvoiceSource: Send + Sync {
    /// Fetch one page of the booked-invoice list
    ///
    /// `next_page` is the absolute URL carried by the previous page's
    /// paging block; `None` requests the first page for the period.
    async fn fetch_summary_page(
        &self,
        period: &ReportingPeriod,
        next_page: Option<&str>,
    ) -> Result<InvoicePage>;

    /// Fetch the full line-item detail for one invoice
    async fn fetch_detail(&self, invoice_number: i64) -> Result<InvoiceDetail>;
}

/// Fetch the complete summary list for a period, following pagination
/// until a page carries no next-page reference
///
/// The list is materialized to exhaustion before any detail resolution
/// starts; a failure on any page aborts with no partial list.
pub async fn fetch_all_summaries(
    source: &dyn BookedInvoiceSource,
    period: &ReportingPeriod,
) -> Result<Vec<InvoiceSummary>> {
    let mut summaries = Vec::new();
    let mut next_page: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let page = source.fetch_summary_page(period, next_page.as_deref()).await?;
        pages += 1;
        summaries.extend(page.collection);
        next_page = page.pagination.and_then(|p| p.next_page);
        if next_page.is_none() {
            break;
        }
    }

    debug!(
        "Fetched {} invoice summaries over {} page(s) for period {}",
        summaries.len(),
        pages,
        period
    );
    Ok(summaries)
}

/// HTTP client for the e-conomic REST API
///
/// Authenticates every request with the two pre-issued secret headers.
/// Transport failures (connection errors, non-2xx statuses) and decode
/// failures (payloads that do not match the expected schema) are kept
/// distinct so the operator can tell an outage from a contract change.
pub struct EconomicClient {
    client: Client,
    base_url: String,
    secret_token: String,
    agreement_token: String,
    page_size: u32,
}

impl EconomicClient {
    pub fn new(client: Client, config: &EconomicConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            secret_token: config.secret_token.clone(),
            agreement_token: config.agreement_token.clone(),
            page_size: config.page_size,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .header("X-AppSecretToken", self.secret_token.as_str())
            .header("X-AgreementGrantToken", self.agreement_token.as_str());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::transport(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected response from {}: {}", url, e)))
    }
}

#[async_trait]
impl BookedInvoiceSource for EconomicClient {
    async fn fetch_summary_page(
        &self,
        period: &ReportingPeriod,
        next_page: Option<&str>,
    ) -> Result<InvoicePage> {
        match next_page {
            // Next-page URLs come back absolute and already carry the
            // filter and paging parameters; follow them verbatim.
            Some(url) => self.get_json(url, None).await,
            None => {
                let url = format!("{}/invoices/booked", self.base_url);
                let query = [
                    ("filter", period.query_predicate()),
                    ("pagesize", self.page_size.to_string()),
                ];
                self.get_json(&url, Some(&query)).await
            }
        }
    }

    async fn fetch_detail(&self, invoice_number: i64) -> Result<InvoiceDetail> {
        let url = format!("{}/invoices/booked/{}", self.base_url, invoice_number);
        self.get_json(&url, None).await
    }
}
