use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::TicketStore;
use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Ticket, TicketId};

/// Ticket store held in process memory, ids starting at 1
pub struct InMemoryTicketStore {
    tickets: RwLock<HashMap<TicketId, Ticket>>,
    next_id: AtomicI64,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self {
            tickets: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn create_ticket(&self, mut ticket: Ticket) -> Result<TicketId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        ticket.id = Some(id);

        self.tickets.write().await.insert(id, ticket);
        tracing::debug!("Stored ticket: id={}", id);

        Ok(id)
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Option<Ticket>> {
        Ok(self.tickets.read().await.get(&id).cloned())
    }

    async fn update_ticket(&self, ticket: Ticket) -> Result<()> {
        let id = ticket
            .id
            .ok_or_else(|| AppError::Storage("Cannot update a ticket without an id".to_string()))?;

        let mut tickets = self.tickets.write().await;
        match tickets.get_mut(&id) {
            Some(stored) => {
                *stored = ticket;
                Ok(())
            }
            None => Err(AppError::Storage(format!(
                "Cannot update ticket {}: not stored",
                id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::models::Priority;
    use crate::features::users::models::User;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn ticket(title: &str) -> Ticket {
        Ticket {
            id: None,
            title: title.to_string(),
            description: "Printer on floor 3 is jammed".to_string(),
            priority: Priority::Low,
            assigned_user: User::new("alice"),
            created: Utc::now(),
            price_dollars: Decimal::ZERO,
            account_manager: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryTicketStore::new();

        let first = store.create_ticket(ticket("first")).await.unwrap();
        let second = store.create_ticket(ticket("second")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let stored = store.get_ticket(second).await.unwrap().unwrap();
        assert_eq!(stored.id, Some(2));
        assert_eq!(stored.title, "second");
    }

    #[tokio::test]
    async fn test_create_ignores_caller_supplied_id() {
        let store = InMemoryTicketStore::new();
        let mut t = ticket("preset");
        t.id = Some(99);

        let id = store.create_ticket(t).await.unwrap();

        assert_eq!(id, 1);
        assert!(store.get_ticket(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_missing_ticket_is_none() {
        let store = InMemoryTicketStore::new();

        assert!(store.get_ticket(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_stored_ticket() {
        let store = InMemoryTicketStore::new();
        let id = store.create_ticket(ticket("reassign me")).await.unwrap();

        let mut stored = store.get_ticket(id).await.unwrap().unwrap();
        stored.assigned_user = User::new("bob");
        store.update_ticket(stored).await.unwrap();

        let reloaded = store.get_ticket(id).await.unwrap().unwrap();
        assert_eq!(reloaded.assigned_user.username, "bob");
    }

    #[tokio::test]
    async fn test_update_unknown_or_unsaved_ticket_fails() {
        let store = InMemoryTicketStore::new();

        let unsaved = store.update_ticket(ticket("unsaved")).await;
        assert!(matches!(unsaved, Err(AppError::Storage(_))));

        let mut unknown = ticket("unknown");
        unknown.id = Some(12);
        let result = store.update_ticket(unknown).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
