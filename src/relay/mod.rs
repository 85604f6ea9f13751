pub mod relay_models;
pub mod relay_service;

pub use relay_models::{DataBlock, DisplayBlock, NotificationRecord, OutboundPayload, CLICK_ACTION};
pub use relay_service::{handle, topic_for_season};
