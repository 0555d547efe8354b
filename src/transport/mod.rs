//! Delivery of the finished record.

#[cfg(feature = "webhook")]
mod webhook;

#[cfg(feature = "webhook")]
pub use webhook::{DEFAULT_WEBHOOK_URL, WebhookTransport};

use crate::error::TransportError;
use crate::value::DraftRecord;
use async_trait::async_trait;

/// Performs the final submission of a completed record.
///
/// Implementations make a single attempt. Any outcome other than an acknowledged
/// success is reported as an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, record: &DraftRecord) -> Result<(), TransportError>;
}

