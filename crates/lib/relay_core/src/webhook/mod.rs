//! Webhook module — outbound calls to the automation backend.
//!
//! Each chat message becomes one `POST {"query": "..."}` to the configured
//! webhook. The reply body is returned as loose JSON; shaping it for display
//! is left to [`crate::normalize`].
//!
//! # Public API
//!
//! - [`WebhookClient::new`] — validate config and build the HTTP client
//! - [`WebhookClient::send`] — forward one message, return the reply payload
//! - [`WebhookError::detail`] — error detail for the client-facing response

pub mod config;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

pub use config::{DEFAULT_TIMEOUT, WebhookConfig};

/// Errors that can occur while talking to the webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Webhook timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Webhook request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Webhook returned status {status}")]
    Status { status: u16, body: Value },
}

impl WebhookError {
    /// Detail to hand back to the caller: the upstream body when the webhook
    /// answered, otherwise the error message.
    pub fn detail(&self) -> Value {
        match self {
            WebhookError::Status { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct WebhookRequest<'a> {
    query: &'a str,
}

/// HTTP client bound to a single webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl WebhookClient {
    /// Build a client for `config`.
    ///
    /// The URL must parse and use `http` or `https`.
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let url: Url = config
            .url
            .parse()
            .map_err(|e| WebhookError::InvalidUrl(format!("{}: {e}", config.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebhookError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WebhookError::Client)?;

        Ok(Self {
            client,
            url,
            timeout: config.timeout,
        })
    }

    /// The webhook URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Forward `message` to the webhook and return the reply payload.
    ///
    /// Non-JSON reply bodies come back as a JSON string.
    pub async fn send(&self, message: &str) -> Result<Value, WebhookError> {
        let resp = self
            .client
            .post(self.url.clone())
            .json(&WebhookRequest { query: message })
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let raw = resp.text().await.map_err(|e| self.request_error(e))?;

        debug!(
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or("-"),
            body = %raw,
            "webhook responded"
        );

        let payload = parse_payload(raw);

        if !status.is_success() {
            error!(status = status.as_u16(), body = %payload, "webhook returned an error status");
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body: payload,
            });
        }

        Ok(payload)
    }

    fn request_error(&self, e: reqwest::Error) -> WebhookError {
        if e.is_timeout() {
            error!(timeout = ?self.timeout, "webhook timed out");
            WebhookError::Timeout(self.timeout)
        } else {
            error!("webhook request failed: {e}");
            WebhookError::Transport(e)
        }
    }
}

/// Parse a reply body as JSON, keeping it as a string when it isn't.
fn parse_payload(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(url: String) -> WebhookClient {
        WebhookClient::new(&WebhookConfig::new(url)).unwrap()
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = WebhookClient::new(&WebhookConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = WebhookClient::new(&WebhookConfig::new("ftp://example.com/hook")).unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(msg) if msg.contains("scheme")));
    }

    #[test]
    fn parse_payload_keeps_non_json_as_string() {
        assert_eq!(parse_payload("{\"a\":1}".into()), json!({ "a": 1 }));
        assert_eq!(parse_payload("hello".into()), json!("hello"));
        assert_eq!(parse_payload(String::new()), json!(""));
    }

    #[test]
    fn status_detail_is_upstream_body() {
        let err = WebhookError::Status {
            status: 404,
            body: json!({ "message": "webhook not registered" }),
        };
        assert_eq!(err.detail(), json!({ "message": "webhook not registered" }));
    }

    #[test]
    fn timeout_detail_is_message() {
        let err = WebhookError::Timeout(Duration::from_secs(20));
        assert_eq!(err.detail(), json!("Webhook timed out after 20000ms"));
    }

    #[tokio::test]
    async fn send_posts_query_and_returns_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/webhook/relay")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "query": "hello" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response":"hi there"}"#)
            .create_async()
            .await;

        let client = client_for(format!("{}/webhook/relay", server.url()));
        let payload = client.send("hello").await.unwrap();

        assert_eq!(payload, json!({ "response": "hi there" }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_returns_plain_text_as_string() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/hook")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("just words")
            .create_async()
            .await;

        let client = client_for(format!("{}/hook", server.url()));
        assert_eq!(client.send("x").await.unwrap(), json!("just words"));
    }

    #[tokio::test]
    async fn non_success_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/hook")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":404,"message":"not registered"}"#)
            .create_async()
            .await;

        let client = client_for(format!("{}/hook", server.url()));
        let err = client.send("x").await.unwrap_err();

        match err {
            WebhookError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, json!({ "code": 404, "message": "not registered" }));
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}/hook"));
        let err = client.send("x").await.unwrap_err();
        assert!(matches!(err, WebhookError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn silent_upstream_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold the connection without ever answering.
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = WebhookConfig::new(format!("http://{addr}/hook"))
            .with_timeout(Duration::from_millis(200));
        let client = WebhookClient::new(&config).unwrap();

        let err = client.send("x").await.unwrap_err();
        assert!(matches!(err, WebhookError::Timeout(d) if d == Duration::from_millis(200)));
    }
}
