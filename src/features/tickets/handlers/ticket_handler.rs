use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, ValidatedJson, ValidatedQuery};
use crate::features::chat_logs::services::ChatLogService;
use crate::features::tickets::dtos::{
    AttachmentResponseDto, CreateAttachmentDto, CreateTicketDto, TicketQueryParams,
    TicketResponseDto, UpdateTicketDto,
};
use crate::features::tickets::services::{TicketFilter, TicketService};
use crate::shared::types::{ErrorResponse, MessageResponse};

/// State shared by ticket and technician handlers
#[derive(Clone)]
pub struct TicketState {
    pub tickets: Arc<TicketService>,
    pub chat_logs: Arc<ChatLogService>,
}

impl TicketState {
    /// Attach the ticket's chat logs, or return it unchanged if they cannot be read
    pub(crate) async fn with_chat_logs(&self, dto: TicketResponseDto) -> TicketResponseDto {
        match self.chat_logs.list_by_ticket(dto.id, None, None).await {
            Ok(logs) => dto.with_chat_logs(logs.into_iter().map(Into::into).collect()),
            Err(e) => {
                tracing::warn!("Failed to fetch AI chat logs for ticket {}: {}", dto.id, e);
                dto
            }
        }
    }
}

/// List tickets
///
/// Filters are optional and combined with AND. Newest tickets first.
#[utoipa::path(
    get,
    path = "/api/tickets",
    params(TicketQueryParams),
    responses(
        (status = 200, description = "List of tickets", body = Vec<TicketResponseDto>),
        (status = 422, description = "Invalid filter value", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(state): State<TicketState>,
    ValidatedQuery(params): ValidatedQuery<TicketQueryParams>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let filter = TicketFilter {
        status: params.status,
        technician_id: params.technician_id,
        priority: params.priority,
    };
    let tickets = state.tickets.list(filter).await?;
    Ok(Json(tickets.into_iter().map(Into::into).collect()))
}

/// Get ticket by ID, including attachments and AI chat logs
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<TicketState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = state
        .tickets
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    Ok(Json(state.with_chat_logs(ticket.into()).await))
}

#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<TicketState>,
    ValidatedJson(dto): ValidatedJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<TicketResponseDto>)> {
    let ticket = state.tickets.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ticket.into())))
}

/// Partially update a ticket
///
/// Only supplied fields change. An explicit `null` clears a nullable field.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(state): State<TicketState>,
    AppPath(id): AppPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = state
        .tickets
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;
    Ok(Json(ticket.into()))
}

#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(state): State<TicketState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    if !state.tickets.delete(id).await? {
        return Err(AppError::NotFound("Ticket not found".to_string()));
    }
    tracing::info!("Ticket {} deleted", id);
    Ok(Json(MessageResponse::new("Ticket deleted successfully")))
}

/// Register an already-stored file against a ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/attachments",
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = CreateAttachmentDto,
    responses(
        (status = 201, description = "Attachment registered", body = AttachmentResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn add_ticket_attachment(
    State(state): State<TicketState>,
    AppPath(id): AppPath<i32>,
    ValidatedJson(dto): ValidatedJson<CreateAttachmentDto>,
) -> Result<(StatusCode, Json<AttachmentResponseDto>)> {
    let attachment = state.tickets.add_attachment(id, dto).await?;
    Ok((StatusCode::CREATED, Json(attachment.into())))
}
