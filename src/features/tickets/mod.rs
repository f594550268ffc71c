//! Ticket lifecycle feature.
//!
//! Creation runs the escalation and pricing rules, alerts the administrator
//! about High priority tickets and persists the result. Reassignment only
//! ever changes the assignee.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/tickets` | Create a ticket |
//! | GET | `/api/tickets/{id}` | Get a ticket |
//! | PUT | `/api/tickets/{id}/assignee` | Reassign a ticket |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{TicketService, TicketServiceConfig};
