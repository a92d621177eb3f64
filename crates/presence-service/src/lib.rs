//! # presence-service
//!
//! Application layer over the presence tracker.
//!
//! ## Features
//!
//! - **Registry**: lock-guarded tracker shared across threads, with structured logging
//! - **Service**: routes notifications to online agents or queues them for offline ones
//!
//! ## Example
//!
//! ```
//! use presence_core::NotificationRecord;
//! use presence_service::{PresenceRegistry, PresenceService, Routing};
//!
//! let service: PresenceService = PresenceService::new(PresenceRegistry::new(["kf_001"]));
//! service.go_offline("kf_001");
//!
//! let note = NotificationRecord::new("u42", "Alice", "g7", "new_message");
//! assert_eq!(service.route("kf_001", note), Routing::Queued);
//!
//! let backlog = service.come_online("kf_001").unwrap_or_default();
//! assert_eq!(backlog.len(), 1);
//! ```

pub mod registry;
pub mod service;

pub use registry::PresenceRegistry;
pub use service::{PresenceService, Routing};
