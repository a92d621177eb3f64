//! Presence status of an agent

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent online status
///
/// Unregistered agents resolve to the default, `Online`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Agent is reachable; notifications are delivered directly
    #[default]
    Online,
    /// Agent is away; notifications are queued until they return
    Offline,
}

impl PresenceStatus {
    #[inline]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    #[inline]
    pub const fn is_offline(self) -> bool {
        matches!(self, Self::Offline)
    }

    /// Lowercase textual form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresenceStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            _ => Err(StatusParseError::Unknown(s.to_string())),
        }
    }
}

/// Error when parsing a PresenceStatus from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusParseError {
    #[error("unknown presence status: {0}")]
    Unknown(String),
}
