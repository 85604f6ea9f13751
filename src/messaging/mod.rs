pub mod errors;
pub mod fcm_client;
pub mod fcm_models;
pub mod publisher;

pub use errors::PublishError;
pub use fcm_client::{FcmClient, DEFAULT_API_BASE_URL};
pub use fcm_models::ServiceAccountKey;
pub use publisher::{PublishReceipt, TopicPublisher};

#[cfg(test)]
pub mod recording;
