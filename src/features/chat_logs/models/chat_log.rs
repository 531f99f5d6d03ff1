use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Kind of assistant interaction, matching the `chat_message_type` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "chat_message_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageType {
    Chat,
    Voice,
    Suggestion,
}

impl std::fmt::Display for ChatMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatMessageType::Chat => write!(f, "chat"),
            ChatMessageType::Voice => write!(f, "voice"),
            ChatMessageType::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// Database model for an AI chat log entry. Rows are never updated.
#[derive(Debug, Clone, FromRow)]
pub struct ChatLog {
    pub id: i32,
    pub ticket_id: i32,
    pub message_type: ChatMessageType,
    pub user_message: String,
    pub ai_response: String,
    pub voice_transcription: Option<String>,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-ticket interaction counters
#[derive(Debug, Clone, FromRow)]
pub struct ChatLogStats {
    pub total_messages: i64,
    pub chat_messages: i64,
    pub voice_messages: i64,
    pub suggestion_requests: i64,
    pub first_interaction: Option<DateTime<Utc>>,
    pub last_interaction: Option<DateTime<Utc>>,
}
