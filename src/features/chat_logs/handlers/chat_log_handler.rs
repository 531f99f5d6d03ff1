use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, ValidatedJson, ValidatedQuery};
use crate::features::chat_logs::dtos::{
    ChatLogListQuery, ChatLogQueryParams, ChatLogResponseDto, ChatLogStatsDto,
    CreateChatLogRequestDto,
};
use crate::features::chat_logs::services::ChatLogService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List a ticket's chat logs, newest first
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/chat-logs",
    params(
        ("id" = i32, Path, description = "Ticket ID"),
        ChatLogListQuery
    ),
    responses(
        (status = 200, description = "Chat logs for the ticket", body = Vec<ChatLogResponseDto>),
        (status = 422, description = "Invalid path or query", body = ErrorResponse)
    ),
    tag = "chat-logs"
)]
pub async fn list_ticket_chat_logs(
    State(service): State<Arc<ChatLogService>>,
    AppPath(ticket_id): AppPath<i32>,
    ValidatedQuery(query): ValidatedQuery<ChatLogListQuery>,
) -> Result<Json<Vec<ChatLogResponseDto>>> {
    let logs = service
        .list_by_ticket(ticket_id, query.limit, query.offset)
        .await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

/// Record a chat log against a ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/chat-logs",
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = CreateChatLogRequestDto,
    responses(
        (status = 201, description = "Chat log created", body = ChatLogResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "chat-logs"
)]
pub async fn create_ticket_chat_log(
    State(service): State<Arc<ChatLogService>>,
    AppPath(ticket_id): AppPath<i32>,
    ValidatedJson(dto): ValidatedJson<CreateChatLogRequestDto>,
) -> Result<(StatusCode, Json<ChatLogResponseDto>)> {
    let log = service.create(dto.for_ticket(ticket_id)).await?;
    Ok((StatusCode::CREATED, Json(log.into())))
}

/// Interaction counters for a ticket
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/chat-logs/stats",
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Chat log statistics", body = ChatLogStatsDto)
    ),
    tag = "chat-logs"
)]
pub async fn get_ticket_chat_log_stats(
    State(service): State<Arc<ChatLogService>>,
    AppPath(ticket_id): AppPath<i32>,
) -> Result<Json<ChatLogStatsDto>> {
    let stats = service.stats(ticket_id).await?;
    Ok(Json(stats.into()))
}

/// Search chat logs across tickets
///
/// Zero or empty filter values are ignored. Without a limit every match is returned.
#[utoipa::path(
    get,
    path = "/api/chat-logs",
    params(ChatLogQueryParams),
    responses(
        (status = 200, description = "Matching chat logs", body = Vec<ChatLogResponseDto>),
        (status = 422, description = "Invalid query", body = ErrorResponse)
    ),
    tag = "chat-logs"
)]
pub async fn list_chat_logs(
    State(service): State<Arc<ChatLogService>>,
    ValidatedQuery(params): ValidatedQuery<ChatLogQueryParams>,
) -> Result<Json<Vec<ChatLogResponseDto>>> {
    let logs = service.list(&params).await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

/// Replay a session in conversation order
#[utoipa::path(
    get,
    path = "/api/chat-logs/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session ID"),
        ChatLogListQuery
    ),
    responses(
        (status = 200, description = "Chat logs for the session", body = Vec<ChatLogResponseDto>)
    ),
    tag = "chat-logs"
)]
pub async fn list_session_chat_logs(
    State(service): State<Arc<ChatLogService>>,
    AppPath(session_id): AppPath<String>,
    ValidatedQuery(query): ValidatedQuery<ChatLogListQuery>,
) -> Result<Json<Vec<ChatLogResponseDto>>> {
    let logs = service
        .list_by_session(&session_id, query.limit, query.offset)
        .await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/chat-logs/{id}",
    params(("id" = i32, Path, description = "Chat log ID")),
    responses(
        (status = 200, description = "Chat log found", body = ChatLogResponseDto),
        (status = 404, description = "Chat log not found", body = ErrorResponse)
    ),
    tag = "chat-logs"
)]
pub async fn get_chat_log(
    State(service): State<Arc<ChatLogService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ChatLogResponseDto>> {
    let log = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chat log not found".to_string()))?;
    Ok(Json(log.into()))
}

#[utoipa::path(
    delete,
    path = "/api/chat-logs/{id}",
    params(("id" = i32, Path, description = "Chat log ID")),
    responses(
        (status = 200, description = "Chat log deleted", body = MessageResponse),
        (status = 404, description = "Chat log not found", body = ErrorResponse)
    ),
    tag = "chat-logs"
)]
pub async fn delete_chat_log(
    State(service): State<Arc<ChatLogService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    if !service.delete_by_id(id).await? {
        return Err(AppError::NotFound("Chat log not found".to_string()));
    }
    Ok(Json(MessageResponse::new("Chat log deleted successfully")))
}
