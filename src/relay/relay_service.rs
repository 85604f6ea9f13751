use tracing::{error, info};

use super::relay_models::{NotificationRecord, OutboundPayload};
use crate::messaging::{PublishError, PublishReceipt, TopicPublisher};

const TOPIC_PREFIX: &str = "season_";

/// Topic every device following a season subscribes to. The id is used verbatim.
pub fn topic_for_season(season_id: &str) -> String {
    format!("{}{}", TOPIC_PREFIX, season_id)
}

/// Relays one newly created notification record to its season topic.
///
/// Makes exactly one publish call; the provider's outcome is returned as-is.
pub async fn handle(
    publisher: &dyn TopicPublisher,
    record: &NotificationRecord,
    season_id: &str,
) -> Result<PublishReceipt, PublishError> {
    let payload = OutboundPayload::from_record(record, season_id);
    let topic = topic_for_season(season_id);

    match publisher.send_to_topic(&topic, &payload).await {
        Ok(receipt) => {
            info!(
                topic = %topic,
                message_id = %receipt.message_id,
                notification_type = %payload.data.notification_type,
                "Published season notification"
            );
            Ok(receipt)
        }
        Err(e) => {
            error!(topic = %topic, "Failed to publish season notification: {}", e);
            Err(e)
        }
    }
}
