use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route("/api/tickets", post(handlers::create_ticket))
        .route("/api/tickets/{id}", get(handlers::get_ticket))
        .route("/api/tickets/{id}/assignee", put(handlers::assign_ticket))
        .with_state(service)
}
