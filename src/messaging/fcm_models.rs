use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::errors::PublishError;
use crate::relay::{DataBlock, OutboundPayload, CLICK_ACTION};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Firebase service account key, as downloaded from the console.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[redacted]")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PublishError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PublishError::Credentials(format!("cannot read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            PublishError::Credentials(format!("cannot parse {}: {}", path.display(), e))
        })
    }
}

#[derive(Debug, Clone)]
pub struct TokenCache {
    pub access_token: String,
    pub expires_at: i64,
}

/// JWT claims for the service-account bearer grant
#[derive(Debug, Serialize)]
pub struct JwtClaims {
    pub iss: String,
    pub sub: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// HTTP v1 `messages:send` request body.
#[derive(Debug, Serialize)]
pub struct FcmMessage {
    pub message: FcmMessageContent,
}

#[derive(Debug, Serialize)]
pub struct FcmMessageContent {
    pub topic: String,
    pub notification: FcmNotification,
    pub data: DataBlock,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

#[derive(Debug, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct AndroidConfig {
    pub notification: AndroidNotification,
}

#[derive(Debug, Serialize)]
pub struct AndroidNotification {
    pub sound: String,
    pub click_action: String,
}

#[derive(Debug, Serialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
}

#[derive(Debug, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Serialize)]
pub struct Aps {
    pub sound: String,
}

impl FcmMessage {
    /// The v1 API has no top-level `sound`; the cue goes into the per-platform blocks.
    pub fn for_topic(topic: &str, payload: &OutboundPayload) -> Self {
        let sound = payload.notification.sound.clone();

        Self {
            message: FcmMessageContent {
                topic: topic.to_string(),
                notification: FcmNotification {
                    title: payload.notification.title.clone(),
                    body: payload.notification.body.clone(),
                },
                data: payload.data.clone(),
                android: AndroidConfig {
                    notification: AndroidNotification {
                        sound: sound.clone(),
                        click_action: CLICK_ACTION.to_string(),
                    },
                },
                apns: ApnsConfig {
                    payload: ApnsPayload {
                        aps: Aps { sound },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FcmApiResponse {
    pub name: Option<String>,
}
