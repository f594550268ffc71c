use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::tickets::models::{Ticket, TicketId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketStore: Send + Sync {
    ///
    /// Persists a new ticket. Any id already on the ticket is ignored.
    ///
    /// ### Returns
    /// Id assigned to the stored ticket
    ///
    async fn create_ticket(&self, ticket: Ticket) -> Result<TicketId>;

    ///
    /// Finds a ticket by id. Returned tickets always carry their id.
    ///
    async fn get_ticket(&self, id: TicketId) -> Result<Option<Ticket>>;

    ///
    /// Replaces a stored ticket.
    ///
    /// ### Errors
    /// - [crate::core::error::AppError::Storage] when
    ///     - the ticket has no id
    ///     - no ticket with that id is stored
    ///
    async fn update_ticket(&self, ticket: Ticket) -> Result<()>;
}
