//! Test helpers for integration tests

use anyhow::{bail, Result};
use presence_common::{try_init_tracing_with_config, TracingConfig};
use presence_core::NotificationRecord;

/// Install the default subscriber once per test binary; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(&TracingConfig::default());
}

/// Sequence numbers stored in each notification's `seq` field, in order
pub fn sequence_numbers(notes: &[NotificationRecord]) -> Result<Vec<u64>> {
    notes
        .iter()
        .map(|note| match note.extra.get("seq").and_then(serde_json::Value::as_u64) {
            Some(seq) => Ok(seq),
            None => bail!("notification for {} has no seq field", note.user_id),
        })
        .collect()
}
