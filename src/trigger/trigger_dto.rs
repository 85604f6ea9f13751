use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::relay::NotificationRecord;

/// Document-creation event as delivered by a change-stream bridge.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DocumentCreatedEvent {
    /// Path or resource name of the created document
    pub document: String,
    pub value: NotificationRecord,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub message_id: String,
    pub topic: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
