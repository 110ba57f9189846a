//! API server configuration.

use std::path::PathBuf;

use relay_core::webhook::WebhookConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Upstream webhook settings.
    pub webhook: WebhookConfig,
    /// Directory holding the browser UI. `None` disables static serving.
    pub static_dir: Option<PathBuf>,
}
