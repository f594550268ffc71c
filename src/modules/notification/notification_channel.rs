use async_trait::async_trait;

use crate::core::error::Result;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    ///
    /// Alerts the administrator about a ticket.
    ///
    /// ### Errors
    /// - [crate::core::error::AppError::Notification] when the message
    ///   could not be delivered
    ///
    async fn send_email_to_administrator(&self, title: &str, assigned_to: &str) -> Result<()>;
}

/// Subject line used for administrator alerts
pub fn alert_subject(title: &str) -> String {
    format!("High priority ticket: {}", title)
}

/// Body text used for administrator alerts
pub fn alert_body(title: &str, assigned_to: &str) -> String {
    format!(
        "Ticket \"{}\" was raised with high priority and assigned to {}.",
        title, assigned_to
    )
}
