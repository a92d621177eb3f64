//! Presence tracking module.
//!
//! Tracks agent online status and notifications queued while offline.

mod presence_tracker;

pub use presence_tracker::PresenceTracker;
