use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::PublishError;
use super::fcm_models::*;
use super::publisher::{PublishReceipt, TopicPublisher};
use crate::relay::OutboundPayload;

pub const DEFAULT_API_BASE_URL: &str = "https://fcm.googleapis.com";

/// Firebase Cloud Messaging client over the HTTP v1 API.
///
/// Exchanges a signed service-account JWT for an OAuth2 access token and
/// caches it, so concurrent sends share one token until shortly before it
/// expires.
pub struct FcmClient {
    project_id: String,
    credentials: Arc<ServiceAccountKey>,
    api_base_url: String,
    token_cache: Mutex<Option<TokenCache>>,
    http_client: reqwest::Client,
}

impl FcmClient {
    pub fn new(
        project_id: String,
        credentials: ServiceAccountKey,
        api_base_url: String,
        timeout: std::time::Duration,
    ) -> Result<Self, PublishError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            project_id,
            credentials: Arc::new(credentials),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token_cache: Mutex::new(None),
            http_client,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.api_base_url, self.project_id
        )
    }

    /// Get access token from service account (with caching)
    pub async fn access_token(&self) -> Result<String, PublishError> {
        // Held across the refresh so only one exchange runs at a time.
        let mut cache = self.token_cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            if cached.expires_at > Utc::now().timestamp() + 60 {
                return Ok(cached.access_token.clone());
            }
        }

        let now = Utc::now();
        let claims = JwtClaims {
            iss: self.credentials.client_email.clone(),
            sub: self.credentials.client_email.clone(),
            scope: MESSAGING_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| PublishError::Credentials(format!("invalid private key: {}", e)))?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.credentials.private_key_id.clone();
        let assertion = encode(&header, &claims, &encoding_key)?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| PublishError::Token(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Token(format!(
                "token request failed with status {}: {}",
                status, body
            )));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Token(format!("unreadable token response: {}", e)))?;

        tracing::debug!(
            expires_in = token_response.expires_in,
            "Refreshed FCM access token"
        );

        *cache = Some(TokenCache {
            access_token: token_response.access_token.clone(),
            expires_at: Utc::now().timestamp() + token_response.expires_in,
        });

        Ok(token_response.access_token)
    }
}

#[async_trait]
impl TopicPublisher for FcmClient {
    async fn send_to_topic(
        &self,
        topic: &str,
        payload: &OutboundPayload,
    ) -> Result<PublishReceipt, PublishError> {
        let access_token = self.access_token().await?;
        let message = FcmMessage::for_topic(topic, payload);

        let response = self
            .http_client
            .post(self.send_url())
            .bearer_auth(access_token)
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PublishError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let fcm_response: FcmApiResponse = response.json().await?;

        Ok(PublishReceipt {
            message_id: fcm_response.name.unwrap_or_default(),
        })
    }
}
