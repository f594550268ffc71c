use async_trait::async_trait;

use super::notification_channel::{alert_body, alert_subject};
use super::NotificationChannel;
use crate::core::error::Result;

/// Writes administrator alerts to the application log
pub struct LogNotificationChannel {
    admin_email: String,
}

impl LogNotificationChannel {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

#[async_trait]
impl NotificationChannel for LogNotificationChannel {
    async fn send_email_to_administrator(&self, title: &str, assigned_to: &str) -> Result<()> {
        tracing::warn!(
            to = %self.admin_email,
            subject = %alert_subject(title),
            "{}",
            alert_body(title, assigned_to)
        );
        Ok(())
    }
}
