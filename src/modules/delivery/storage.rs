use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use chrono::NaiveDate;
use tracing::info;

use crate::core::{AppError, Result};

/// Persists the rendered report artifact and returns its location
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Store the artifact for the period starting at `period_start`;
    /// returns the object key of the stored artifact.
    async fn store(&self, bytes: Vec<u8>, period_start: NaiveDate) -> Result<String>;
}

/// S3-backed report store
///
/// Objects are keyed by environment tag and period start, so re-running
/// a period overwrites that period's report in place.
pub struct S3ReportStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    environment: String,
}

impl S3ReportStore {
    /// Build a store from the ambient AWS credential chain and region
    pub async fn from_env(bucket: String, environment: String) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket,
            environment,
        }
    }
}

fn object_key(environment: &str, period_start: NaiveDate) -> String {
    format!("{}/{}/credit-settlement.pdf", environment, period_start)
}

#[async_trait]
impl ReportStore for S3ReportStore {
    async fn store(&self, bytes: Vec<u8>, period_start: NaiveDate) -> Result<String> {
        let key = object_key(&self.environment, period_start);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("application/pdf")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AppError::upload(format!("s3://{}/{}: {}", self.bucket, key, e)))?;

        info!("Report uploaded to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}
