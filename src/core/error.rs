/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Pipeline-stage errors (range, transport, decode, credit-line, quantity)
/// abort the run. Sink errors (render, upload, notify) are reported by the
/// orchestrator without discarding the computed report.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors (missing secrets, unparseable values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed or inverted reporting period
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// Network/HTTP-layer failure talking to an external service
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response payload did not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invoice carries no line at the configured credit ordinal
    #[error("Invoice {invoice} has no credit line at position {ordinal}")]
    NoCreditLine { invoice: i64, ordinal: u32 },

    /// Negative aggregated credit quantity, upstream data corruption
    #[error("Invalid credit quantity: {0}")]
    InvalidQuantity(String),

    /// PDF rendering failure
    #[error("Render error: {0}")]
    Render(String),

    /// Object storage upload failure
    #[error("Upload error: {0}")]
    Upload(String),

    /// Chat notification failure
    #[error("Notify error: {0}")]
    Notify(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        AppError::InvalidRange(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        AppError::Render(msg.into())
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        AppError::Upload(msg.into())
    }

    pub fn notify(msg: impl Into<String>) -> Self {
        AppError::Notify(msg.into())
    }

    /// True for failures at a delivery sink boundary; the orchestrator
    /// reports these without aborting the remaining sinks.
    pub fn is_sink_error(&self) -> bool {
        matches!(
            self,
            AppError::Render(_) | AppError::Upload(_) | AppError::Notify(_)
        )
    }
}
