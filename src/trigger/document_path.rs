use crate::error::{AppError, Result};

/// Ids carried by a `seasons/{seasonId}/notifications/{notifId}` document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDocument {
    pub season_id: String,
    pub notification_id: String,
}

impl NotificationDocument {
    /// Accepts both relative paths and fully qualified resource names such as
    /// `projects/p/databases/(default)/documents/seasons/2024/notifications/n1`.
    pub fn parse(document: &str) -> Result<Self> {
        let segments: Vec<&str> = document.trim_matches('/').split('/').collect();

        match segments.as_slice() {
            ["seasons", season_id, "notifications", notification_id]
            | ["projects", _, "databases", _, "documents", "seasons", season_id, "notifications", notification_id]
                if !season_id.is_empty() && !notification_id.is_empty() =>
            {
                Ok(Self {
                    season_id: season_id.to_string(),
                    notification_id: notification_id.to_string(),
                })
            }
            _ => Err(AppError::BadRequest(format!(
                "document {:?} is not a season notification",
                document
            ))),
        }
    }
}
