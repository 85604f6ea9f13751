use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    relay::{DataBlock, DisplayBlock, NotificationRecord, OutboundPayload},
    state::AppState,
    trigger::{self, DocumentCreatedEvent, HealthResponse, RelayResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        trigger::trigger_handlers::notification_created,
        trigger::trigger_handlers::document_created,
        trigger::trigger_handlers::health,
    ),
    components(
        schemas(
            NotificationRecord,
            DocumentCreatedEvent,
            RelayResponse,
            HealthResponse,
            OutboundPayload,
            DisplayBlock,
            DataBlock,
        )
    ),
    tags(
        (name = "trigger", description = "Document-creation trigger endpoints"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/seasons/:season_id/notifications/:notification_id",
            post(trigger::notification_created),
        )
        .route("/events", post(trigger::document_created));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(trigger::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
