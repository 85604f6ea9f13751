use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const DEFAULT_NOTIFICATION_TYPE: &str = "INFO";
pub const DEFAULT_SOUND: &str = "default";
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

/// A notification document created under `seasons/{seasonId}/notifications`.
///
/// Only JSON objects are accepted. Missing or `null` text fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct NotificationRecord {
    pub title: String,
    pub body: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
}

impl<'de> Deserialize<'de> for NotificationRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = NotificationRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a notification document object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = NotificationRecord::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => record.title = map.next_value::<Option<String>>()?.unwrap_or_default(),
                "body" => record.body = map.next_value::<Option<String>>()?.unwrap_or_default(),
                "type" => record.notification_type = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(record)
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }
}

/// Display block shown by the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayBlock {
    pub title: String,
    pub body: String,
    pub sound: String,
}

/// Data block handed to the client app for routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataBlock {
    pub click_action: String,
    #[serde(rename = "seasonId")]
    pub season_id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OutboundPayload {
    pub notification: DisplayBlock,
    pub data: DataBlock,
}

impl OutboundPayload {
    pub fn from_record(record: &NotificationRecord, season_id: &str) -> Self {
        Self {
            notification: DisplayBlock {
                title: record.title.clone(),
                body: record.body.clone(),
                sound: DEFAULT_SOUND.to_string(),
            },
            data: DataBlock {
                click_action: CLICK_ACTION.to_string(),
                season_id: season_id.to_string(),
                notification_type: resolve_type(record.notification_type.as_deref()),
            },
        }
    }
}

/// Falls back to `INFO` when the record carries no usable type.
pub fn resolve_type(notification_type: Option<&str>) -> String {
    match notification_type {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_NOTIFICATION_TYPE.to_string(),
    }
}
