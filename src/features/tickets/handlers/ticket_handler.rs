use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::tickets::dtos::{
    AssignTicketDto, CreateTicketDto, TicketCreatedDto, TicketResponseDto,
};
use crate::features::tickets::models::TicketId;
use crate::features::tickets::services::TicketService;
use crate::shared::types::ApiResponse;

/// Create a ticket
///
/// Priority may be escalated (age over one hour, keywords "Crash",
/// "Important", "Failure" in the title). High priority tickets alert the
/// administrator.
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = ApiResponse<TicketCreatedDto>),
        (status = 400, description = "Empty title or description"),
        (status = 404, description = "Assignee not found")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<ApiResponse<TicketCreatedDto>>)> {
    dto.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let new_ticket = dto.into_new_ticket(service.now());
    let ticket_id = service.create_ticket(new_ticket).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(TicketCreatedDto { ticket_id }),
            Some("Ticket created".to_string()),
        )),
    ))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<TicketResponseDto>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<TicketId>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.get_ticket(id).await?;
    Ok(Json(ApiResponse::success(
        Some(TicketResponseDto::new(id, ticket)),
        None,
    )))
}

/// Reassign a ticket
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/assignee",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    request_body = AssignTicketDto,
    responses(
        (status = 200, description = "Ticket reassigned", body = ApiResponse<TicketResponseDto>),
        (status = 404, description = "Ticket or user not found")
    ),
    tag = "tickets"
)]
pub async fn assign_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<TicketId>,
    AppJson(dto): AppJson<AssignTicketDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    service.assign_ticket(id, &dto.username).await?;

    let ticket = service.get_ticket(id).await?;
    Ok(Json(ApiResponse::success(
        Some(TicketResponseDto::new(id, ticket)),
        Some("Ticket reassigned".to_string()),
    )))
}
