use async_trait::async_trait;

use super::errors::PublishError;
use crate::relay::OutboundPayload;

/// Provider acknowledgement for a single topic publish.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    pub message_id: String,
}

/// "Send to topic" operation of a push-messaging provider.
///
/// One instance is shared by every in-flight event, so implementations must be
/// safe to call concurrently.
#[async_trait]
pub trait TopicPublisher: Send + Sync {
    async fn send_to_topic(
        &self,
        topic: &str,
        payload: &OutboundPayload,
    ) -> Result<PublishReceipt, PublishError>;
}
