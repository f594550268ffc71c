use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::tickets::models::TicketId;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("No ticket found for id {0}")]
    TicketNotFound(TicketId),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("User directory error: {0}")]
    Directory(String),

    #[error("Ticket storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Audit snapshot error: {0}")]
    Audit(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::InvalidInput(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::UnknownUser(ref username) => (
                StatusCode::NOT_FOUND,
                format!("User {} not found", username),
                None,
            ),
            AppError::TicketNotFound(_) => (StatusCode::NOT_FOUND, self.to_string(), None),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Directory(ref msg) => {
                tracing::error!("User directory error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "User directory unavailable".to_string(),
                    None,
                )
            }
            AppError::Storage(ref msg) => {
                tracing::error!("Ticket storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ticket storage error occurred".to_string(),
                    None,
                )
            }
            AppError::Notification(ref msg) => {
                tracing::error!("Notification error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Administrator notification failed".to_string(),
                    None,
                )
            }
            AppError::Audit(ref msg) => {
                tracing::error!("Audit snapshot error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Audit snapshot could not be written".to_string(),
                    None,
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_client_statuses() {
        let cases = [
            (AppError::InvalidInput("title".into()), StatusCode::BAD_REQUEST),
            (AppError::UnknownUser("ghost".into()), StatusCode::NOT_FOUND),
            (AppError::TicketNotFound(42), StatusCode::NOT_FOUND),
            (AppError::BadRequest("json".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_collaborator_errors_map_to_server_statuses() {
        assert_eq!(
            AppError::Notification("smtp down".into())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Storage("disk full".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_ticket_not_found_message_contains_id() {
        assert_eq!(
            AppError::TicketNotFound(7).to_string(),
            "No ticket found for id 7"
        );
    }
}
