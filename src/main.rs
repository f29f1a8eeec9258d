use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shutterledger::config::Config;
use shutterledger::modules::delivery::{S3ReportStore, SlackNotifier};
use shutterledger::modules::invoices::services::EconomicClient;
use shutterledger::modules::reports::services::PdfRenderer;
use shutterledger::modules::settlement::services::{CreditLineExtractor, RevenueSplitCalculator};
use shutterledger::pipeline::SettlementPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shutterledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting photographer credit settlement run");
    tracing::info!("Environment: {}", config.app.env);

    let reference = chrono::Utc::now().date_naive();
    let period = config.settlement.reporting_period(reference)?;
    tracing::info!("Reporting period: {}", period);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.app.http_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let source = Arc::new(EconomicClient::new(http.clone(), &config.economic));
    let extractor = CreditLineExtractor::new(config.settlement.credit_line_ordinal);
    let calculator = RevenueSplitCalculator::new(config.settlement.photographer_percent)?;
    let renderer = Arc::new(PdfRenderer::new());
    let store = Arc::new(
        S3ReportStore::from_env(config.delivery.bucket.clone(), config.app.env.clone()).await,
    );
    let notifier = Arc::new(SlackNotifier::new(
        http,
        config.delivery.slack_webhook_url.clone(),
        config.delivery.bucket.clone(),
    ));

    let pipeline =
        SettlementPipeline::new(source, extractor, calculator, renderer, store, notifier);

    let summary = pipeline.run(period).await?;

    tracing::info!(
        "Settlement run finished: {} invoice(s), {} credits ({} photographer / {} platform)",
        summary.report.len(),
        summary.report.total_credits(),
        summary.report.total_photographer_share(),
        summary.report.total_platform_share()
    );
    if let Some(location) = &summary.location {
        tracing::info!("Report stored at {}", location);
    }
    // Sink failures are reported without failing the run; the report
    // itself was produced and remains valid.
    for err in &summary.sink_errors {
        tracing::error!("Sink failure: {}", err);
    }

    Ok(())
}
