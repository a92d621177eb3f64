//! Shared presence registry
//!
//! Thread-safe handle around a single [`PresenceTracker`]. One mutex guards
//! the whole tracker and is held for the full duration of every call, so
//! compound steps such as read-and-clear are never observed half done.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use presence_core::{AgentId, NotificationRecord, PresenceStatus, PresenceTracker};

/// Cloneable, thread-safe presence registry
///
/// Clones share the same underlying tracker.
pub struct PresenceRegistry<N = NotificationRecord> {
    inner: Arc<Mutex<PresenceTracker<N>>>,
}

impl<N> Clone for PresenceRegistry<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for PresenceRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceRegistry")
            .field("tracker", &*self.inner.lock())
            .finish()
    }
}

impl<N> Default for PresenceRegistry<N> {
    fn default() -> Self {
        Self::from_tracker(PresenceTracker::default())
    }
}

impl<N> PresenceRegistry<N> {
    /// Create a registry with every agent in `agent_ids` online
    pub fn new<I, S>(agent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AgentId>,
    {
        let registry = Self::from_tracker(PresenceTracker::new(agent_ids));
        tracing::debug!(agents = registry.len(), "Presence registry created");
        registry
    }

    /// Wrap an existing tracker
    pub fn from_tracker(tracker: PresenceTracker<N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Mark a known agent online
    pub fn set_online(&self, agent_id: &str) -> bool {
        let changed = self.inner.lock().set_online(agent_id);
        log_status_change(agent_id, PresenceStatus::Online, changed);
        changed
    }

    /// Mark a known agent offline
    pub fn set_offline(&self, agent_id: &str) -> bool {
        let changed = self.inner.lock().set_offline(agent_id);
        log_status_change(agent_id, PresenceStatus::Offline, changed);
        changed
    }

    pub fn status(&self, agent_id: &str) -> PresenceStatus {
        self.inner.lock().status(agent_id)
    }

    pub fn is_online(&self, agent_id: &str) -> bool {
        self.inner.lock().is_online(agent_id)
    }

    pub fn is_offline(&self, agent_id: &str) -> bool {
        self.inner.lock().is_offline(agent_id)
    }

    /// Add an agent if not yet known
    pub fn register_agent(&self, agent_id: impl Into<AgentId>) {
        let agent_id = agent_id.into();
        let mut tracker = self.inner.lock();
        if tracker.is_registered(agent_id.as_str()) {
            return;
        }
        tracing::debug!(agent_id = %agent_id, "Agent registered");
        tracker.register_agent(agent_id);
    }

    pub fn is_registered(&self, agent_id: &str) -> bool {
        self.inner.lock().is_registered(agent_id)
    }

    /// Queue a notification for a known agent; unknown agents drop it
    pub fn enqueue_pending(&self, agent_id: &str, note: N) -> bool {
        let queued = self.inner.lock().enqueue_pending(agent_id, note);
        log_enqueue(agent_id, queued);
        queued
    }

    /// Take and clear every queued notification for the agent
    pub fn drain_pending(&self, agent_id: &str) -> Vec<N> {
        let drained = self.inner.lock().drain_pending(agent_id);
        if !drained.is_empty() {
            tracing::debug!(
                agent_id = %agent_id,
                count = drained.len(),
                "Pending notifications drained"
            );
        }
        drained
    }

    pub fn pending_count(&self, agent_id: &str) -> usize {
        self.inner.lock().pending_count(agent_id)
    }

    pub fn has_any_online(&self) -> bool {
        self.inner.lock().has_any_online()
    }

    /// Snapshot of all registered agents
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.inner.lock().agent_ids().cloned().collect()
    }

    /// Snapshot of agents currently online
    pub fn online_agents(&self) -> Vec<AgentId> {
        self.inner.lock().online_agents().cloned().collect()
    }

    /// Snapshot of agents currently offline
    pub fn offline_agents(&self) -> Vec<AgentId> {
        self.inner.lock().offline_agents().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Mark the agent online and hand back everything queued while it was
    /// away, as one step. Returns `None` for unknown agents.
    pub fn come_online(&self, agent_id: &str) -> Option<Vec<N>> {
        let drained = {
            let mut tracker = self.inner.lock();
            tracker
                .set_online(agent_id)
                .then(|| tracker.drain_pending(agent_id))
        };

        match &drained {
            Some(notes) => tracing::debug!(
                agent_id = %agent_id,
                pending = notes.len(),
                "Agent back online"
            ),
            None => tracing::debug!(agent_id = %agent_id, "Unknown agent cannot come online"),
        }

        drained
    }

    /// Queue `note` if the agent is offline, otherwise give it back for
    /// immediate delivery. Status check and enqueue share one lock.
    pub fn hold_if_offline(&self, agent_id: &str, note: N) -> Option<N> {
        let mut tracker = self.inner.lock();
        if tracker.is_online(agent_id) {
            return Some(note);
        }
        let queued = tracker.enqueue_pending(agent_id, note);
        drop(tracker);

        log_enqueue(agent_id, queued);
        None
    }
}

fn log_status_change(agent_id: &str, status: PresenceStatus, changed: bool) {
    if changed {
        tracing::debug!(agent_id = %agent_id, status = %status, "Agent status updated");
    } else {
        tracing::debug!(
            agent_id = %agent_id,
            status = %status,
            "Status change for unknown agent ignored"
        );
    }
}

fn log_enqueue(agent_id: &str, queued: bool) {
    if queued {
        tracing::trace!(agent_id = %agent_id, "Notification queued");
    } else {
        tracing::debug!(agent_id = %agent_id, "Notification for unknown agent dropped");
    }
}
