use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::notification_channel::{alert_body, alert_subject};
use super::NotificationChannel;
use crate::core::error::{AppError, Result};

/// Payload POSTed to the notification webhook
#[derive(Debug, Serialize)]
struct AdministratorAlert<'a> {
    to: &'a str,
    subject: String,
    body: String,
}

/// Delivers administrator alerts to an HTTP webhook (mail relay, chat hook, ...)
pub struct WebhookNotificationChannel {
    http_client: reqwest::Client,
    webhook_url: String,
    admin_email: String,
}

impl WebhookNotificationChannel {
    pub fn new(
        webhook_url: impl Into<String>,
        admin_email: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            webhook_url: webhook_url.into(),
            admin_email: admin_email.into(),
        })
    }
}

#[async_trait]
impl NotificationChannel for WebhookNotificationChannel {
    async fn send_email_to_administrator(&self, title: &str, assigned_to: &str) -> Result<()> {
        let alert = AdministratorAlert {
            to: &self.admin_email,
            subject: alert_subject(title),
            body: alert_body(title, assigned_to),
        };

        tracing::debug!("Sending administrator alert to {}", self.webhook_url);

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&alert)
            .send()
            .await
            .map_err(|e| {
                AppError::Notification(format!("Failed to reach notification webhook: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Notification(format!(
                "Notification webhook error: HTTP {} - {}",
                status, body
            )));
        }

        Ok(())
    }
}
