pub mod rules;
mod ticket_service;

pub use ticket_service::{NewTicket, TicketService, TicketServiceConfig};
