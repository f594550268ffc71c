//! Ticket storage
//!
//! Persistence seam for tickets. The store assigns ids; implementations must
//! be safe to call from concurrent requests.

mod memory_ticket_store;
mod ticket_store;

pub use memory_ticket_store::InMemoryTicketStore;
pub use ticket_store::TicketStore;

#[cfg(test)]
pub use ticket_store::MockTicketStore;
