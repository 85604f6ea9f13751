use async_trait::async_trait;
use std::sync::Mutex;

use super::errors::PublishError;
use super::publisher::{PublishReceipt, TopicPublisher};
use crate::relay::OutboundPayload;

/// In-memory publisher that records every call. Fails each send with a
/// provider rejection when built with `rejecting`.
#[derive(Default)]
pub struct RecordingPublisher {
    pub sent: Mutex<Vec<(String, OutboundPayload)>>,
    reject_with: Option<(u16, String)>,
}

impl RecordingPublisher {
    pub fn rejecting(status: u16, body: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: Some((status, body.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<(String, OutboundPayload)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TopicPublisher for RecordingPublisher {
    async fn send_to_topic(
        &self,
        topic: &str,
        payload: &OutboundPayload,
    ) -> Result<PublishReceipt, PublishError> {
        let message_id = {
            let mut sent = self.sent.lock().unwrap();
            sent.push((topic.to_string(), payload.clone()));
            format!("projects/test/messages/{}", sent.len())
        };

        match &self.reject_with {
            Some((status, body)) => Err(PublishError::Api {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(PublishReceipt { message_id }),
        }
    }
}
