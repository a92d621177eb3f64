//! Domain entities

mod notification;

pub use notification::NotificationRecord;
