use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::chat_logs::models::{ChatLog, ChatLogStats, ChatMessageType};

/// Response DTO for a chat log entry.
///
/// Optional fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatLogResponseDto {
    pub id: i32,
    pub ticket_id: i32,
    pub message_type: ChatMessageType,
    pub user_message: String,
    pub ai_response: String,
    pub voice_transcription: Option<String>,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ChatLog> for ChatLogResponseDto {
    fn from(log: ChatLog) -> Self {
        Self {
            id: log.id,
            ticket_id: log.ticket_id,
            message_type: log.message_type,
            user_message: log.user_message,
            ai_response: log.ai_response,
            voice_transcription: log.voice_transcription,
            session_id: log.session_id,
            created_at: log.created_at,
        }
    }
}

/// Request body for `POST /tickets/{id}/chat-logs`; the ticket comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChatLogRequestDto {
    pub message_type: ChatMessageType,
    #[validate(length(min = 1, message = "user_message must not be empty"))]
    pub user_message: String,
    #[validate(length(min = 1, message = "ai_response must not be empty"))]
    pub ai_response: String,
    pub voice_transcription: Option<String>,
    #[validate(length(max = 255))]
    pub session_id: Option<String>,
}

impl CreateChatLogRequestDto {
    pub fn for_ticket(self, ticket_id: i32) -> CreateChatLogDto {
        CreateChatLogDto {
            ticket_id,
            message_type: self.message_type,
            user_message: self.user_message,
            ai_response: self.ai_response,
            voice_transcription: self.voice_transcription,
            session_id: self.session_id,
        }
    }
}

/// Everything needed to insert a chat log row
#[derive(Debug, Clone)]
pub struct CreateChatLogDto {
    pub ticket_id: i32,
    pub message_type: ChatMessageType,
    pub user_message: String,
    pub ai_response: String,
    pub voice_transcription: Option<String>,
    pub session_id: Option<String>,
}

/// Paging for a single ticket's or session's chat logs
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
pub struct ChatLogListQuery {
    /// Page size, defaults to 50
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
    /// Rows to skip, defaults to 0
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// Flexible chat log filter. Zero or empty values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
pub struct ChatLogQueryParams {
    pub ticket_id: Option<i32>,
    pub message_type: Option<ChatMessageType>,
    pub session_id: Option<String>,
    #[validate(range(min = 0, max = 500))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// Interaction summary for one ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatLogStatsDto {
    pub total_messages: i64,
    pub chat_messages: i64,
    pub voice_messages: i64,
    pub suggestion_requests: i64,
    pub first_interaction: Option<DateTime<Utc>>,
    pub last_interaction: Option<DateTime<Utc>>,
}

impl From<ChatLogStats> for ChatLogStatsDto {
    fn from(s: ChatLogStats) -> Self {
        Self {
            total_messages: s.total_messages,
            chat_messages: s.chat_messages,
            voice_messages: s.voice_messages,
            suggestion_requests: s.suggestion_requests,
            first_interaction: s.first_interaction,
            last_interaction: s.last_interaction,
        }
    }
}
