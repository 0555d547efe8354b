use super::Transport;
use crate::error::TransportError;
use crate::value::DraftRecord;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Endpoint the briefing form posts to.
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.forwardbridge.com.br/webhook/form";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Posts the record as a JSON body to a webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: Client,
    url: String,
}

impl WebhookTransport {
    pub fn new(url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn deliver(&self, record: &DraftRecord) -> Result<(), TransportError> {
        debug!(url = %self.url, fields = record.len(), "posting record");
        let response = self
            .client
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "webhook request failed");
                TransportError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "webhook rejected record");
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }
}
