pub mod document_path;
pub mod trigger_dto;
pub mod trigger_handlers;

pub use trigger_dto::{DocumentCreatedEvent, HealthResponse, RelayResponse};
pub use trigger_handlers::{document_created, health, notification_created};
