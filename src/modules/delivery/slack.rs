use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::core::{AppError, ReportingPeriod, Result};

/// Announces a finished settlement run to the operators' channel
#[async_trait]
pub trait ReportNotifier: Send + Sync {
    /// `location` is the stored artifact's object key when the upload
    /// succeeded; the notification is still sent without one.
    async fn notify(&self, period: &ReportingPeriod, location: Option<&str>) -> Result<()>;
}

/// Slack incoming-webhook notifier
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
    bucket: String,
}

#[derive(Debug, Serialize)]
struct WebhookMessage {
    attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
struct Attachment {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_link: Option<String>,
    pretext: String,
    text: String,
    color: String,
    fields: Vec<AttachmentField>,
    footer: String,
}

#[derive(Debug, Serialize)]
struct AttachmentField {
    title: String,
    value: String,
    short: bool,
}

impl SlackNotifier {
    pub fn new(client: Client, webhook_url: String, bucket: String) -> Self {
        Self {
            client,
            webhook_url,
            bucket,
        }
    }

    fn build_message(&self, period: &ReportingPeriod, location: Option<&str>) -> WebhookMessage {
        let (title_link, text) = match location {
            Some(key) => (
                Some(format!(
                    "https://s3.console.aws.amazon.com/s3/buckets/{}/{}",
                    self.bucket, key
                )),
                "New photographer credit numbers are available as PDF. Click the link above to access it.".to_string(),
            ),
            None => (
                None,
                "The settlement report was generated, but the upload to storage failed. Check the run logs.".to_string(),
            ),
        };

        WebhookMessage {
            attachments: vec![Attachment {
                title: "Monthly credit settlement".to_string(),
                title_link,
                pretext: "A settlement run just finished.".to_string(),
                text,
                color: "#00711D".to_string(),
                fields: vec![AttachmentField {
                    title: "Period".to_string(),
                    value: period.label(),
                    short: true,
                }],
                footer: "Automated message from the settlement job.".to_string(),
            }],
        }
    }
}

#[async_trait]
impl ReportNotifier for SlackNotifier {
    async fn notify(&self, period: &ReportingPeriod, location: Option<&str>) -> Result<()> {
        let message = self.build_message(period, location);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| AppError::notify(format!("Slack webhook: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::notify(format!(
                "Slack webhook returned {}: {}",
                status, body
            )));
        }

        info!("Slack notification delivered for period {}", period);
        Ok(())
    }
}
