use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, ReportingPeriod, Result};
use crate::modules::delivery::{ReportNotifier, ReportStore};
use crate::modules::invoices::services::{fetch_all_summaries, BookedInvoiceSource};
use crate::modules::reports::models::SettlementReport;
use crate::modules::reports::services::ReportRenderer;
use crate::modules::settlement::services::{CreditLineExtractor, RevenueSplitCalculator};

/// Outcome of one settlement run
///
/// The report is valid once the pipeline stages have completed; sink
/// failures are carried alongside it instead of discarding it.
#[derive(Debug)]
pub struct RunSummary {
    pub report: SettlementReport,

    /// Object key of the stored artifact, when the upload succeeded
    pub location: Option<String>,

    /// Sink-boundary failures, in the order the sinks were attempted
    pub sink_errors: Vec<AppError>,
}

impl RunSummary {
    pub fn all_sinks_succeeded(&self) -> bool {
        self.sink_errors.is_empty()
    }
}

/// Drives one settlement run end to end
///
/// Stage errors (fetch, decode, extraction, split) propagate immediately
/// and abort the run with no partial report. Sink errors (render,
/// upload, notify) are caught individually and reported in the summary;
/// every remaining sink that still has its input is attempted.
pub struct SettlementPipeline {
    source: Arc<dyn BookedInvoiceSource>,
    extractor: CreditLineExtractor,
    calculator: RevenueSplitCalculator,
    renderer: Arc<dyn ReportRenderer>,
    store: Arc<dyn ReportStore>,
    notifier: Arc<dyn ReportNotifier>,
}

impl SettlementPipeline {
    pub fn new(
        source: Arc<dyn BookedInvoiceSource>,
        extractor: CreditLineExtractor,
        calculator: RevenueSplitCalculator,
        renderer: Arc<dyn ReportRenderer>,
        store: Arc<dyn ReportStore>,
        notifier: Arc<dyn ReportNotifier>,
    ) -> Self {
        Self {
            source,
            extractor,
            calculator,
            renderer,
            store,
            notifier,
        }
    }

    /// Run the pipeline for one reporting period
    pub async fn run(&self, period: ReportingPeriod) -> Result<RunSummary> {
        info!("Starting settlement run for period {}", period);

        let report = self.build_report(period).await?;
        info!(
            "Report assembled: {} invoice(s), {} credits",
            report.len(),
            report.total_credits()
        );

        let (location, sink_errors) = self.deliver(&report).await;
        Ok(RunSummary {
            report,
            location,
            sink_errors,
        })
    }

    /// Summary fetch, detail resolution, extraction, split, and fold
    async fn build_report(&self, period: ReportingPeriod) -> Result<SettlementReport> {
        let summaries = fetch_all_summaries(self.source.as_ref(), &period).await?;
        info!(
            "Found {} booked invoice(s) for period {}",
            summaries.len(),
            period
        );

        let mut report = SettlementReport::new(period);
        for summary in &summaries {
            let detail = self.source.fetch_detail(summary.invoice_number).await?;
            let record = self.extractor.extract(&detail)?;
            let split = self.calculator.split(record)?;
            report.push(split);
        }
        Ok(report)
    }

    /// Hand the finished report to the render, store, and notify sinks
    ///
    /// Upload needs the rendered bytes, so a render failure skips it.
    /// Notification is attempted regardless, carrying the storage
    /// location when one exists.
    async fn deliver(&self, report: &SettlementReport) -> (Option<String>, Vec<AppError>) {
        let mut sink_errors = Vec::new();
        let mut location = None;

        match self.renderer.render(report) {
            Ok(bytes) => {
                info!("Report rendered ({} bytes)", bytes.len());
                match self.store.store(bytes, report.period.from).await {
                    Ok(key) => location = Some(key),
                    Err(err) => {
                        error!("Upload failed: {}", err);
                        sink_errors.push(err);
                    }
                }
            }
            Err(err) => {
                error!("Render failed, nothing to upload: {}", err);
                sink_errors.push(err);
            }
        }

        if let Err(err) = self.notifier.notify(&report.period, location.as_deref()).await {
            error!("Notification failed: {}", err);
            sink_errors.push(err);
        }

        (location, sink_errors)
    }
}
