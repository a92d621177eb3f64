//! Test fixtures and data generators

use chrono::{TimeZone, Utc};
use presence_core::NotificationRecord;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A fresh agent id that no other test uses
pub fn unique_agent_id() -> String {
    format!("kf_{:04}", unique_suffix())
}

/// Roster of `n` unique agent ids
pub fn roster(n: usize) -> Vec<String> {
    (0..n).map(|_| unique_agent_id()).collect()
}

/// Notification with a fixed timestamp and a sequence number in `extra`
pub fn sample_notification(seq: u64) -> NotificationRecord {
    let ts = Utc
        .timestamp_opt(1_714_564_800 + i64::try_from(seq).unwrap_or(0), 0)
        .single()
        .unwrap_or_default();

    NotificationRecord::new(
        format!("user{seq}"),
        format!("Customer {seq}"),
        "group-1",
        "new_message",
    )
    .with_timestamp(ts)
    .with_field("seq", seq)
}

/// Raw JSON payload as produced by the chat-routing layer
pub fn raw_notification_json(user_id: &str, kind: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "display_name": "Walk-in customer",
        "group_id": "group-42",
        "timestamp": "2024-05-01T12:00:00Z",
        "type": kind,
        "channel": "web"
    })
}
