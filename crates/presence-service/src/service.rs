//! Presence service
//!
//! Caller-facing flow for the messaging layer: flip agents offline, route
//! incoming notifications, and hand back the backlog when an agent returns.

use presence_common::{try_init_tracing_with_config, AppConfig, AppResult};
use presence_core::NotificationRecord;
use tracing::{info, instrument};

use crate::registry::PresenceRegistry;

/// Outcome of routing a notification
#[derive(Debug, Clone, PartialEq)]
pub enum Routing<N = NotificationRecord> {
    /// Agent is online; deliver the notification now
    Deliver(N),
    /// Agent is offline; the notification was queued
    Queued,
}

impl<N> Routing<N> {
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued)
    }

    /// The notification to deliver, if any
    pub fn into_delivery(self) -> Option<N> {
        match self {
            Self::Deliver(note) => Some(note),
            Self::Queued => None,
        }
    }
}

/// Presence service
#[derive(Clone, Debug)]
pub struct PresenceService<N = NotificationRecord> {
    registry: PresenceRegistry<N>,
}

impl PresenceService {
    /// Load configuration from the environment, install the tracing
    /// subscriber, and build the service from the configured roster.
    ///
    /// # Errors
    /// Fails on invalid configuration or if a global subscriber is already set.
    pub fn bootstrap() -> AppResult<Self> {
        let config = AppConfig::from_env()?;
        try_init_tracing_with_config(&config.tracing())?;

        info!(
            app = %config.app.name,
            env = ?config.app.env,
            agents = config.roster.agent_ids.len(),
            "Configuration loaded"
        );

        Ok(Self::from_config(&config))
    }
}

impl<N> PresenceService<N> {
    /// Create a service from an existing registry
    pub fn new(registry: PresenceRegistry<N>) -> Self {
        Self { registry }
    }

    /// Create a service tracking the configured roster
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(PresenceRegistry::new(&config.roster.agent_ids))
    }

    /// Underlying registry
    pub fn registry(&self) -> &PresenceRegistry<N> {
        &self.registry
    }

    /// Add an agent to the roster (online, empty queue)
    pub fn register_agent(&self, agent_id: &str) {
        self.registry.register_agent(agent_id);
    }

    /// Mark an agent offline; subsequent notifications are queued
    #[instrument(skip(self))]
    pub fn go_offline(&self, agent_id: &str) -> bool {
        self.registry.set_offline(agent_id)
    }

    /// Mark an agent online and return the notifications it missed, oldest
    /// first. `None` if the agent is not registered.
    #[instrument(skip(self))]
    pub fn come_online(&self, agent_id: &str) -> Option<Vec<N>> {
        self.registry.come_online(agent_id)
    }

    /// Decide what to do with a notification addressed to an agent.
    ///
    /// Online agents (and unknown ones, which count as online) get it back
    /// as [`Routing::Deliver`]; offline agents have it queued.
    #[instrument(skip(self, note))]
    pub fn route(&self, agent_id: &str, note: N) -> Routing<N> {
        match self.registry.hold_if_offline(agent_id, note) {
            Some(note) => Routing::Deliver(note),
            None => Routing::Queued,
        }
    }

    /// Whether anyone is available to take new conversations
    pub fn has_available_agent(&self) -> bool {
        self.registry.has_any_online()
    }
}
