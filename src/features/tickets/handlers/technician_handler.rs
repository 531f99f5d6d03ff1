use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, ValidatedJson, ValidatedQuery};
use crate::features::tickets::dtos::{
    TechnicianTicketsQuery, TicketResponseDto, UpdateTicketStatusDto,
};
use crate::features::tickets::handlers::ticket_handler::TicketState;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// A technician's dispatch queue
///
/// Ordered by priority (urgent first), then by scheduled date.
#[utoipa::path(
    get,
    path = "/api/technicians/{technician_id}/tickets",
    params(
        ("technician_id" = i32, Path, description = "Technician ID"),
        TechnicianTicketsQuery
    ),
    responses(
        (status = 200, description = "Tickets assigned to the technician", body = Vec<TicketResponseDto>),
        (status = 422, description = "Invalid path or query", body = ErrorResponse)
    ),
    tag = "technicians"
)]
pub async fn list_technician_tickets(
    State(state): State<TicketState>,
    AppPath(technician_id): AppPath<i32>,
    ValidatedQuery(query): ValidatedQuery<TechnicianTicketsQuery>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let tickets = state
        .tickets
        .list_for_technician(technician_id, query.status)
        .await?;
    Ok(Json(tickets.into_iter().map(Into::into).collect()))
}

/// Get one of a technician's tickets with AI chat logs
///
/// A ticket assigned to someone else is reported as not found.
#[utoipa::path(
    get,
    path = "/api/technicians/{technician_id}/tickets/{ticket_id}",
    params(
        ("technician_id" = i32, Path, description = "Technician ID"),
        ("ticket_id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "technicians"
)]
pub async fn get_technician_ticket(
    State(state): State<TicketState>,
    AppPath((technician_id, ticket_id)): AppPath<(i32, i32)>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = state
        .tickets
        .get_by_id(ticket_id)
        .await?
        .filter(|t| t.ticket.assigned_technician_id == technician_id)
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    Ok(Json(state.with_chat_logs(ticket.into()).await))
}

#[utoipa::path(
    patch,
    path = "/api/technicians/{technician_id}/tickets/{ticket_id}/status",
    params(
        ("technician_id" = i32, Path, description = "Technician ID"),
        ("ticket_id" = i32, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 404, description = "Ticket not found or not assigned to this technician", body = ErrorResponse),
        (status = 422, description = "Unknown status", body = ErrorResponse)
    ),
    tag = "technicians"
)]
pub async fn update_technician_ticket_status(
    State(state): State<TicketState>,
    AppPath((technician_id, ticket_id)): AppPath<(i32, i32)>,
    ValidatedJson(dto): ValidatedJson<UpdateTicketStatusDto>,
) -> Result<Json<MessageResponse>> {
    state
        .tickets
        .update_status(ticket_id, dto.status, Some(technician_id))
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Ticket not found or not assigned to this technician".to_string())
        })?;

    Ok(Json(MessageResponse::new(format!(
        "Ticket status updated to {}",
        dto.status
    ))))
}
