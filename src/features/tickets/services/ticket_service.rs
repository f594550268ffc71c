use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::config::SideEffectPolicy;
use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Priority, Ticket, TicketId};
use crate::features::tickets::services::rules;
use crate::features::users::models::User;
use crate::modules::audit::AuditSink;
use crate::modules::directory::UserDirectory;
use crate::modules::notification::NotificationChannel;
use crate::modules::storage::TicketStore;
use crate::shared::clock::Clock;

/// How ticket creation reacts to side-effect failures
#[derive(Debug, Clone, Copy)]
pub struct TicketServiceConfig {
    pub notification_policy: SideEffectPolicy,
    pub audit_policy: SideEffectPolicy,
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            notification_policy: SideEffectPolicy::Propagate,
            audit_policy: SideEffectPolicy::Isolate,
        }
    }
}

/// Input for creating a ticket
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assigned_to: String,
    pub created: DateTime<Utc>,
    pub is_paying_customer: bool,
}

/// Service for ticket creation and assignment
pub struct TicketService {
    config: TicketServiceConfig,
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn TicketStore>,
    notifier: Arc<dyn NotificationChannel>,
    audit: Arc<dyn AuditSink>,
    clock: Arc<dyn Clock>,
}

impl TicketService {
    pub fn new(
        config: TicketServiceConfig,
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn TicketStore>,
        notifier: Arc<dyn NotificationChannel>,
        audit: Arc<dyn AuditSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            directory,
            store,
            notifier,
            audit,
            clock,
        }
    }

    /// Create a ticket and return the id assigned by the store
    ///
    /// Order: validate, resolve assignee, escalate (age then title), notify
    /// on High, price, attach account manager, audit snapshot, persist.
    pub async fn create_ticket(&self, new_ticket: NewTicket) -> Result<TicketId> {
        Self::validate_ticket_input(&new_ticket.title, &new_ticket.description)?;

        let assigned_user = self.find_user(&new_ticket.assigned_to).await?;

        let priority = rules::resolve_priority(
            new_ticket.priority,
            &new_ticket.title,
            new_ticket.created,
            self.clock.now(),
        );

        if priority == Priority::High {
            self.notify_administrator(&new_ticket.title, &new_ticket.assigned_to)
                .await?;
        }

        let price_dollars = rules::calculate_price(new_ticket.is_paying_customer, priority);

        let account_manager = if new_ticket.is_paying_customer {
            Some(self.directory.get_account_manager().await?)
        } else {
            None
        };

        let ticket = Ticket {
            id: None,
            title: new_ticket.title,
            description: new_ticket.description,
            priority,
            assigned_user,
            created: new_ticket.created,
            price_dollars,
            account_manager,
        };

        self.write_audit_snapshot(&ticket).await?;

        let id = self.store.create_ticket(ticket).await?;

        tracing::info!(
            "Ticket created: id={}, priority={}, assigned_to={}, price={}",
            id,
            priority,
            new_ticket.assigned_to,
            price_dollars
        );

        Ok(id)
    }

    /// Reassign a ticket; priority and price are left untouched
    pub async fn assign_ticket(&self, id: TicketId, username: &str) -> Result<()> {
        let user = self.find_user(username).await?;

        let mut ticket = self.get_ticket(id).await?;

        ticket.assigned_user = user;
        self.store.update_ticket(ticket).await?;

        tracing::info!("Ticket assigned: id={}, assigned_to={}", id, username);

        Ok(())
    }

    /// Current time according to the service's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Get ticket by ID
    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.store
            .get_ticket(id)
            .await?
            .ok_or(AppError::TicketNotFound(id))
    }

    fn validate_ticket_input(title: &str, description: &str) -> Result<()> {
        if title.is_empty() || description.is_empty() {
            return Err(AppError::InvalidInput(
                "Title or Description should not be empty".to_string(),
            ));
        }

        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<User> {
        self.directory
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))
    }

    async fn notify_administrator(&self, title: &str, assigned_to: &str) -> Result<()> {
        let result = self
            .notifier
            .send_email_to_administrator(title, assigned_to)
            .await;

        Self::apply_policy(self.config.notification_policy, "administrator notification", result)
    }

    async fn write_audit_snapshot(&self, ticket: &Ticket) -> Result<()> {
        let result = self.audit.write_ticket_snapshot(ticket).await;

        Self::apply_policy(self.config.audit_policy, "audit snapshot", result)
    }

    fn apply_policy(policy: SideEffectPolicy, side_effect: &str, result: Result<()>) -> Result<()> {
        match (result, policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), SideEffectPolicy::Propagate) => Err(e),
            (Err(e), SideEffectPolicy::Isolate) => {
                tracing::warn!("Ignoring failed {}: {}", side_effect, e);
                Ok(())
            }
        }
    }
}
