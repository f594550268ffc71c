//! Administrator notifications
//!
//! High-priority tickets alert the administrator. Without a configured
//! webhook the alert only goes to the log.

mod log_channel;
mod notification_channel;
mod webhook_channel;

pub use log_channel::LogNotificationChannel;
pub use notification_channel::NotificationChannel;
pub use webhook_channel::WebhookNotificationChannel;

#[cfg(test)]
pub use notification_channel::MockNotificationChannel;
