use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::messaging::PublishError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("Failed to initialize messaging client: {0}")]
    Messaging(#[from] PublishError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Publish(ref e) => {
                tracing::error!("Publish error: {:?}", e);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
