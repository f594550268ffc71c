use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tickets::models::{Priority, Ticket, TicketId};
use crate::features::tickets::services::NewTicket;
use crate::features::users::models::User;

/// Request DTO for creating a ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketDto {
    /// Ticket title (required, non-empty)
    #[serde(default)]
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Ticket description (required, non-empty)
    #[serde(default)]
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// Requested priority before escalation rules are applied
    pub priority: Priority,

    /// Username of the assignee
    pub assigned_to: String,

    /// When the issue was raised (defaults to now)
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_paying_customer: bool,
}

impl CreateTicketDto {
    pub fn into_new_ticket(self, now: DateTime<Utc>) -> NewTicket {
        NewTicket {
            title: self.title,
            description: self.description,
            priority: self.priority,
            assigned_to: self.assigned_to,
            created: self.created_at.unwrap_or(now),
            is_paying_customer: self.is_paying_customer,
        }
    }
}

/// Request DTO for reassigning a ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketDto {
    pub username: String,
}

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assigned_user: User,
    pub created: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_dollars: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_manager: Option<User>,
}

impl TicketResponseDto {
    pub fn new(id: TicketId, t: Ticket) -> Self {
        Self {
            id,
            title: t.title,
            description: t.description,
            priority: t.priority,
            assigned_user: t.assigned_user,
            created: t.created,
            price_dollars: t.price_dollars,
            account_manager: t.account_manager,
        }
    }
}

/// Response DTO for a newly created ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreatedDto {
    pub ticket_id: TicketId,
}
