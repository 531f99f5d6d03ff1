use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::assistant::services::voice::{VoiceAnalysis, VoiceFileInfo};

/// Request DTO for a chat message to the assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    /// When set, the exchange is logged against this ticket; `0` means no ticket
    #[validate(range(min = 0, message = "ticketId must not be negative"))]
    pub ticket_id: Option<i32>,
    /// Logged as a `voice` interaction instead of `chat`
    #[serde(default)]
    pub is_voice_message: bool,
}

impl ChatRequestDto {
    /// The referenced ticket, if any
    pub fn ticket(&self) -> Option<i32> {
        self.ticket_id.filter(|id| *id != 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Llm,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    pub timestamp: DateTime<Utc>,
    pub is_voice_message: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponseDto {
    pub message: ChatMessageDto,
    pub success: bool,
}

/// Multipart form for a voice recording upload
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadAudioDto {
    /// Audio file (`audio/*`, at most 10MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub audio: String,
    /// Numeric ticket ID to log the interaction against
    #[schema(rename = "ticketId")]
    pub ticket_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VoiceFileInfoDto {
    pub filename: String,
    pub size_bytes: u64,
    pub mimetype: String,
    pub processed_at: DateTime<Utc>,
    /// Seconds, estimated from the file size
    pub duration_estimate: u64,
}

impl From<VoiceFileInfo> for VoiceFileInfoDto {
    fn from(info: VoiceFileInfo) -> Self {
        Self {
            filename: info.filename,
            size_bytes: info.size_bytes,
            mimetype: info.mimetype,
            processed_at: info.processed_at,
            duration_estimate: info.duration_estimate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRecordingResponseDto {
    pub success: bool,
    pub message: String,
    pub transcription: String,
    pub processed_text: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    /// Seconds
    pub processing_time: f64,
    pub file_info: VoiceFileInfoDto,
}

impl From<VoiceAnalysis> for VoiceRecordingResponseDto {
    fn from(analysis: VoiceAnalysis) -> Self {
        Self {
            success: true,
            message: analysis.response.clone(),
            transcription: analysis.transcription.to_string(),
            processed_text: analysis.response,
            confidence: analysis.confidence,
            sources: analysis.sources,
            processing_time: analysis.processing_time,
            file_info: analysis.file_info.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestionRequestDto {
    /// Free-text context, logged only
    pub context: Option<String>,
    /// `electrical`, `mechanical` or `hvac` for tailored prompts
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponseDto {
    pub suggestions: Vec<String>,
    pub context: String,
}
