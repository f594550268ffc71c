use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::tickets::models::Ticket;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    ///
    /// Writes a non-authoritative snapshot of the ticket, keyed by its id.
    ///
    /// ### Errors
    /// - [crate::core::error::AppError::Audit] when the snapshot could not
    ///   be serialized or written
    ///
    async fn write_ticket_snapshot(&self, ticket: &Ticket) -> Result<()>;
}
