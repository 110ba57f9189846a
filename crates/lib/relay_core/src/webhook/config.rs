//! Webhook endpoint configuration.

use std::time::Duration;

/// Outbound request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Where and how to reach the automation backend.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Full webhook URL, e.g. `http://localhost:5678/webhook/relay`.
    pub url: String,
    /// Maximum time to wait for the upstream response.
    pub timeout: Duration,
}

impl WebhookConfig {
    /// Config for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
