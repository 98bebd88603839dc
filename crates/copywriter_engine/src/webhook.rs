use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::reply::{reply_text, server_error_message};
use crate::{FailureKind, SendError};

pub const DEFAULT_WEBHOOK_URL: &str =
    "http://localhost:5678/webhook-test/8f737c09-7579-4a6b-ac6a-bfcd1a71784b";

/// `request_timeout` bounds the whole exchange, connecting included.
#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: String,
    pub request_timeout: Duration,
    pub max_reply_bytes: u64,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            max_reply_bytes: 1024 * 1024,
        }
    }
}

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
    pub timestamp: String,
}

/// Produces the request timestamp.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Current UTC time as ISO-8601 with millisecond precision, e.g. `2026-01-01T12:00:00.000Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait::async_trait]
pub trait PromptSender: Send + Sync {
    /// Posts the prompt and returns the reply text to display.
    async fn send(&self, prompt: &str) -> Result<String, SendError>;
}

pub struct ReqwestSender {
    settings: WebhookSettings,
    client: reqwest::Client,
    clock: Clock,
}

impl ReqwestSender {
    pub fn new(settings: WebhookSettings) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            client,
            clock: Arc::new(utc_timestamp),
        })
    }

    /// Replaces the timestamp source, mainly for deterministic tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SendError> {
        let max_bytes = self.settings.max_reply_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| self.map_reqwest_error(err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> SendError {
        if err.is_timeout() {
            return SendError::new(
                FailureKind::Timeout,
                format!(
                    "timeout of {}ms exceeded",
                    self.settings.request_timeout.as_millis()
                ),
            );
        }
        SendError::new(FailureKind::Network, err.to_string())
    }
}

#[async_trait::async_trait]
impl PromptSender for ReqwestSender {
    async fn send(&self, prompt: &str) -> Result<String, SendError> {
        let url = reqwest::Url::parse(&self.settings.url)
            .map_err(|err| SendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let body = serde_json::to_vec(&PromptRequest {
            prompt,
            timestamp: (self.clock)(),
        })
        .map_err(|err| SendError::new(FailureKind::Encode, err.to_string()))?;

        engine_info!(
            "POST {} prompt_len={} timeout_ms={}",
            url,
            prompt.len(),
            self.settings.request_timeout.as_millis()
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body just means there is no server message.
            let message = match self.read_body(response).await {
                Ok(bytes) => server_error_message(&bytes),
                Err(err) => {
                    engine_debug!("Error body unreadable: {}", err);
                    None
                }
            }
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            engine_warn!("Webhook rejected request: {} ({})", status, message);
            return Err(SendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let bytes = self.read_body(response).await?;
        engine_debug!("Reply status={} bytes={}", status, bytes.len());
        Ok(reply_text(&bytes))
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> SendError {
    SendError::new(
        FailureKind::TooLarge { max_bytes, actual },
        format!("reply exceeds {max_bytes} bytes"),
    )
}
