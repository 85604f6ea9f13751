use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use super::{
    document_path::NotificationDocument,
    trigger_dto::{DocumentCreatedEvent, HealthResponse, RelayResponse},
};
use crate::{
    error::Result,
    relay::{self, NotificationRecord},
    state::AppState,
};

async fn relay_record(
    state: &AppState,
    record: &NotificationRecord,
    season_id: &str,
) -> Result<Json<RelayResponse>> {
    let receipt = relay::handle(state.publisher.as_ref(), record, season_id).await?;

    Ok(Json(RelayResponse {
        message_id: receipt.message_id,
        topic: relay::topic_for_season(season_id),
    }))
}

/// Relay a notification created at `seasons/{season_id}/notifications/{notification_id}`
#[utoipa::path(
    post,
    path = "/api/seasons/{season_id}/notifications/{notification_id}",
    params(
        ("season_id" = String, Path, description = "Season identifier"),
        ("notification_id" = String, Path, description = "Notification document ID")
    ),
    request_body = NotificationRecord,
    responses(
        (status = 200, description = "Published to the season topic", body = RelayResponse),
        (status = 502, description = "Messaging provider rejected the publish")
    ),
    tag = "trigger"
)]
pub async fn notification_created(
    State(state): State<AppState>,
    Path((season_id, notification_id)): Path<(String, String)>,
    Json(record): Json<NotificationRecord>,
) -> Result<Json<RelayResponse>> {
    debug!(%season_id, %notification_id, "Notification created");
    relay_record(&state, &record, &season_id).await
}

/// Relay a document-creation event addressed by its document path
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = DocumentCreatedEvent,
    responses(
        (status = 200, description = "Published to the season topic", body = RelayResponse),
        (status = 400, description = "Document is not a season notification"),
        (status = 502, description = "Messaging provider rejected the publish")
    ),
    tag = "trigger"
)]
pub async fn document_created(
    State(state): State<AppState>,
    Json(event): Json<DocumentCreatedEvent>,
) -> Result<Json<RelayResponse>> {
    let document = NotificationDocument::parse(&event.document)?;
    debug!(
        season_id = %document.season_id,
        notification_id = %document.notification_id,
        "Document created event"
    );
    relay_record(&state, &event.value, &document.season_id).await
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
