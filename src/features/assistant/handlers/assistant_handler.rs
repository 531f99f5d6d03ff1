use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, ValidatedJson};
use crate::features::assistant::dtos::{
    ChatRequestDto, ChatResponseDto, SuggestionRequestDto, SuggestionResponseDto,
    UploadAudioDto, VoiceRecordingResponseDto,
};
use crate::features::assistant::services::{voice::AudioUpload, AssistantService};
use crate::shared::constants::{AUDIO_MIME_PREFIX, MAX_AUDIO_FILE_SIZE};
use crate::shared::types::ErrorResponse;

/// Send a chat message to the assistant
#[utoipa::path(
    post,
    path = "/api/tickets/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "assistant"
)]
pub async fn send_chat_message(
    State(service): State<Arc<AssistantService>>,
    ValidatedJson(dto): ValidatedJson<ChatRequestDto>,
) -> Result<Json<ChatResponseDto>> {
    Ok(Json(service.chat(dto).await))
}

/// Transcribe a voice recording and return guidance
#[utoipa::path(
    post,
    path = "/api/tickets/voice-recording",
    request_body(
        content = UploadAudioDto,
        content_type = "multipart/form-data",
        description = "Audio recording with optional ticket ID"
    ),
    responses(
        (status = 200, description = "Recording processed", body = VoiceRecordingResponseDto),
        (status = 400, description = "Missing, non-audio or oversized file", body = ErrorResponse),
        (status = 422, description = "Non-numeric ticketId", body = ErrorResponse)
    ),
    tag = "assistant"
)]
pub async fn process_voice_recording(
    State(service): State<Arc<AssistantService>>,
    mut multipart: Multipart,
) -> Result<Json<VoiceRecordingResponseDto>> {
    let mut audio: Option<AudioUpload> = None;
    let mut ticket_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "audio" => {
                let mime_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "recording".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read audio bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read audio data: {}", e))
                })?;

                audio = Some(AudioUpload {
                    file_name,
                    mime_type,
                    size: data.len(),
                });
            }
            "ticketId" => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read ticketId: {}", e))
                })?;
                ticket_id = Some(value);
            }
            _ => debug!("Ignoring unknown field: {}", field_name),
        }
    }

    let audio = audio.ok_or_else(|| AppError::BadRequest("No audio file provided".to_string()))?;

    if !audio.mime_type.starts_with(AUDIO_MIME_PREFIX) {
        return Err(AppError::BadRequest(
            "Only audio files are allowed".to_string(),
        ));
    }

    if audio.size > MAX_AUDIO_FILE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Audio file too large. Maximum size is {} MB",
            MAX_AUDIO_FILE_SIZE / 1024 / 1024
        )));
    }

    let ticket_id = parse_ticket_id(ticket_id.as_deref())?;

    Ok(Json(service.voice_recording(audio, ticket_id).await))
}

/// Blank means "no ticket"; anything else must be a positive integer
fn parse_ticket_id(raw: Option<&str>) -> Result<Option<i32>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => match value.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Some(id)),
            _ => Err(AppError::validation(
                "formData.ticketId",
                "ticketId must be a positive integer",
            )),
        },
    }
}

/// Suggested follow-up questions for a ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/ai-suggestions",
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = SuggestionRequestDto,
    responses(
        (status = 200, description = "Suggestions generated", body = SuggestionResponseDto),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "assistant"
)]
pub async fn get_ticket_suggestions(
    State(service): State<Arc<AssistantService>>,
    AppPath(ticket_id): AppPath<i32>,
    ValidatedJson(dto): ValidatedJson<SuggestionRequestDto>,
) -> Result<Json<SuggestionResponseDto>> {
    Ok(Json(service.suggestions(ticket_id, dto).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticket_id() {
        assert_eq!(parse_ticket_id(None).unwrap(), None);
        assert_eq!(parse_ticket_id(Some("")).unwrap(), None);
        assert_eq!(parse_ticket_id(Some(" 12 ")).unwrap(), Some(12));
        assert!(matches!(
            parse_ticket_id(Some("abc")),
            Err(AppError::Validation(_))
        ));
        assert!(parse_ticket_id(Some("0")).is_err());
    }
}
