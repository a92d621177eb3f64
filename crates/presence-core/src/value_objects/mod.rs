//! Value objects - immutable types that represent domain concepts

mod agent_id;
mod presence_status;

pub use agent_id::AgentId;
pub use presence_status::{PresenceStatus, StatusParseError};
