//! Notification record - an event queued for an agent while they are offline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the typed fields; `extra` must never carry them
const RESERVED_KEYS: [&str; 5] = ["user_id", "display_name", "group_id", "timestamp", "type"];

/// Notification payload
///
/// The tracker stores these without looking inside. Unknown fields survive
/// a deserialize/serialize cycle through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Customer the event concerns
    pub user_id: String,
    pub display_name: String,
    /// Conversation group the event belongs to
    pub group_id: String,
    pub timestamp: DateTime<Utc>,
    /// Event type tag, e.g. "new_message"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationRecord {
    /// Create a new NotificationRecord stamped with the current time
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        group_id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            group_id: group_id.into(),
            timestamp: Utc::now(),
            kind: kind.into(),
            extra: Map::new(),
        }
    }

    /// Override the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach an extra field. Keys that name a typed field are ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return self;
        }
        self.extra.insert(key, value.into());
        self
    }
}
