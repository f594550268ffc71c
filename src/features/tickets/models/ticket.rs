use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::User;

/// Identifier assigned by the ticket store
pub type TicketId = i64;

/// Ticket priority, ordered Low < Medium < High
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// The next priority up; High saturates
    pub fn escalate(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::High,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Support ticket
///
/// `id` is `None` until the store persists the ticket. After creation only
/// `assigned_user` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Option<TicketId>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assigned_user: User,
    pub created: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_dollars: Decimal,
    pub account_manager: Option<User>,
}
