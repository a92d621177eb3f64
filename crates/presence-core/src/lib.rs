//! # presence-core
//!
//! Domain layer for support-desk presence: agent identifiers, presence status,
//! notification records, and the tracker that ties them together.
//! This crate has no dependencies on infrastructure (logging, locking, config).
//!
//! ## Example
//!
//! ```
//! use presence_core::{NotificationRecord, PresenceTracker};
//!
//! let mut tracker: PresenceTracker = PresenceTracker::new(["kf_001", "kf_002"]);
//! tracker.set_offline("kf_001");
//!
//! let note = NotificationRecord::new("u42", "Alice", "g7", "new_message");
//! tracker.enqueue_pending("kf_001", note);
//!
//! tracker.set_online("kf_001");
//! assert_eq!(tracker.drain_pending("kf_001").len(), 1);
//! ```

pub mod entities;
pub mod tracker;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::NotificationRecord;
pub use tracker::PresenceTracker;
pub use value_objects::{AgentId, PresenceStatus, StatusParseError};
