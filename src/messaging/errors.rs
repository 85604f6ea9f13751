use thiserror::Error;

/// Every way a publish to the messaging provider can fail.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid service account credentials: {0}")]
    Credentials(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncode(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to get access token: {0}")]
    Token(String),

    #[error("FCM send request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("FCM API error: {status} - {body}")]
    Api { status: u16, body: String },
}
