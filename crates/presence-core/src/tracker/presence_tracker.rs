//! In-memory presence tracker.
//!
//! Holds the status of every registered agent together with the
//! notifications that piled up while that agent was offline.

use std::collections::HashMap;
use std::mem;

use crate::entities::NotificationRecord;
use crate::value_objects::{AgentId, PresenceStatus};

/// Per-agent state. Status and pending queue live together so an agent is
/// always registered in both or neither.
#[derive(Debug, Clone)]
struct AgentSlot<N> {
    status: PresenceStatus,
    pending: Vec<N>,
}

impl<N> AgentSlot<N> {
    fn new() -> Self {
        Self {
            status: PresenceStatus::Online,
            pending: Vec::new(),
        }
    }
}

/// Presence tracker for a roster of agents
///
/// Every operation is total: unknown agents are treated as online, mutations
/// against them are no-ops, and draining them yields nothing.
///
/// The tracker is generic over the queued record type and never inspects it.
#[derive(Debug, Clone)]
pub struct PresenceTracker<N = NotificationRecord> {
    agents: HashMap<AgentId, AgentSlot<N>>,
}

impl<N> Default for PresenceTracker<N> {
    fn default() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }
}

impl<N> PresenceTracker<N> {
    /// Create a tracker with every agent in `agent_ids` online and no
    /// pending notifications. Duplicate ids collapse to one entry.
    pub fn new<I, S>(agent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AgentId>,
    {
        let mut tracker = Self::default();
        for id in agent_ids {
            tracker.register_agent(id);
        }
        tracker
    }

    /// Mark a known agent online. Returns `false` for unknown agents.
    pub fn set_online(&mut self, agent_id: &str) -> bool {
        self.set_status(agent_id, PresenceStatus::Online)
    }

    /// Mark a known agent offline. Returns `false` for unknown agents.
    pub fn set_offline(&mut self, agent_id: &str) -> bool {
        self.set_status(agent_id, PresenceStatus::Offline)
    }

    fn set_status(&mut self, agent_id: &str, status: PresenceStatus) -> bool {
        match self.agents.get_mut(agent_id) {
            Some(slot) => {
                slot.status = status;
                true
            }
            None => false,
        }
    }

    /// Current status; unknown agents are `Online`
    pub fn status(&self, agent_id: &str) -> PresenceStatus {
        match self.agents.get(agent_id) {
            Some(slot) => slot.status,
            None => PresenceStatus::Online,
        }
    }

    /// Whether the agent is online; unknown agents are online
    pub fn is_online(&self, agent_id: &str) -> bool {
        self.status(agent_id).is_online()
    }

    /// Whether the agent is offline; unknown agents are not
    pub fn is_offline(&self, agent_id: &str) -> bool {
        self.status(agent_id).is_offline()
    }

    /// Add an agent as online with an empty queue.
    ///
    /// Already-registered agents are left untouched, including their status
    /// and pending notifications.
    pub fn register_agent(&mut self, agent_id: impl Into<AgentId>) {
        self.agents
            .entry(agent_id.into())
            .or_insert_with(AgentSlot::new);
    }

    /// Whether the agent is part of the roster
    pub fn is_registered(&self, agent_id: &str) -> bool {
        self.agents.contains_key(agent_id)
    }

    /// Queue a notification for a known agent.
    ///
    /// Notifications for unknown agents are dropped; the agent is not
    /// registered implicitly. Returns whether the record was queued.
    pub fn enqueue_pending(&mut self, agent_id: &str, note: N) -> bool {
        match self.agents.get_mut(agent_id) {
            Some(slot) => {
                slot.pending.push(note);
                true
            }
            None => false,
        }
    }

    /// Take every queued notification in arrival order, leaving the queue
    /// empty. Unknown agents yield an empty list.
    pub fn drain_pending(&mut self, agent_id: &str) -> Vec<N> {
        match self.agents.get_mut(agent_id) {
            Some(slot) => mem::take(&mut slot.pending),
            None => Vec::new(),
        }
    }

    /// Number of queued notifications; zero for unknown agents
    pub fn pending_count(&self, agent_id: &str) -> usize {
        match self.agents.get(agent_id) {
            Some(slot) => slot.pending.len(),
            None => 0,
        }
    }

    /// Whether at least one registered agent is online.
    ///
    /// An empty roster has no online agent.
    pub fn has_any_online(&self) -> bool {
        self.agents.values().any(|slot| slot.status.is_online())
    }

    /// All registered agents, in no particular order
    pub fn agent_ids(&self) -> impl Iterator<Item = &AgentId> + '_ {
        self.agents.keys()
    }

    /// Registered agents currently online
    pub fn online_agents(&self) -> impl Iterator<Item = &AgentId> + '_ {
        self.agents_with(PresenceStatus::Online)
    }

    /// Registered agents currently offline
    pub fn offline_agents(&self) -> impl Iterator<Item = &AgentId> + '_ {
        self.agents_with(PresenceStatus::Offline)
    }

    fn agents_with(&self, status: PresenceStatus) -> impl Iterator<Item = &AgentId> + '_ {
        self.agents
            .iter()
            .filter(move |(_, slot)| slot.status == status)
            .map(|(id, _)| id)
    }

    /// Roster size
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<N, S: Into<AgentId>> FromIterator<S> for PresenceTracker<N> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
