use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};

use crate::features::assistant::dtos::{
    ChatMessageDto, ChatRequestDto, ChatResponseDto, MessageSender, SuggestionRequestDto,
    SuggestionResponseDto, VoiceRecordingResponseDto,
};
use crate::features::assistant::services::{responder, suggestions, voice};
use crate::features::chat_logs::dtos::CreateChatLogDto;
use crate::features::chat_logs::models::ChatMessageType;
use crate::features::chat_logs::services::ChatLogService;

/// Mock AI assistant.
///
/// Replies are canned; exchanges tied to a ticket are recorded as chat logs on
/// a best-effort basis.
pub struct AssistantService {
    chat_logs: Arc<ChatLogService>,
    rng: Mutex<StdRng>,
}

impl AssistantService {
    pub fn new(chat_logs: Arc<ChatLogService>) -> Self {
        Self::with_rng(chat_logs, StdRng::from_entropy())
    }

    /// Use a caller-supplied generator, e.g. a fixed seed in tests
    pub fn with_rng(chat_logs: Arc<ChatLogService>, rng: StdRng) -> Self {
        Self {
            chat_logs,
            rng: Mutex::new(rng),
        }
    }

    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    pub async fn chat(&self, request: ChatRequestDto) -> ChatResponseDto {
        let ticket_id = request.ticket();
        let text = self.with_rng_locked(|rng| {
            responder::generate_response(rng, &request.message, ticket_id)
        });

        if let Some(ticket_id) = ticket_id {
            let message_type = if request.is_voice_message {
                ChatMessageType::Voice
            } else {
                ChatMessageType::Chat
            };
            self.log_best_effort(CreateChatLogDto {
                ticket_id,
                message_type,
                user_message: request.message,
                ai_response: text.clone(),
                voice_transcription: None,
                session_id: Some(format!("session_{}", Utc::now().timestamp_millis())),
            })
            .await;
        }

        let now = Utc::now();
        ChatResponseDto {
            message: ChatMessageDto {
                id: now.timestamp_millis().to_string(),
                text,
                sender: MessageSender::Llm,
                timestamp: now,
                is_voice_message: false,
            },
            success: true,
        }
    }

    pub async fn voice_recording(
        &self,
        upload: voice::AudioUpload,
        ticket_id: Option<i32>,
    ) -> VoiceRecordingResponseDto {
        tracing::info!(
            "Processing voice recording: filename={}, mimetype={}, size={}, ticket={:?}",
            upload.file_name,
            upload.mime_type,
            upload.size,
            ticket_id
        );

        let analysis = self.with_rng_locked(|rng| voice::analyze(rng, &upload, ticket_id));

        if let Some(ticket_id) = ticket_id {
            self.log_best_effort(CreateChatLogDto {
                ticket_id,
                message_type: ChatMessageType::Voice,
                user_message: analysis.transcription.to_string(),
                ai_response: analysis.response.clone(),
                voice_transcription: Some(analysis.transcription.to_string()),
                session_id: Some(format!("voice_session_{}", Utc::now().timestamp_millis())),
            })
            .await;
        }

        analysis.into()
    }

    pub async fn suggestions(
        &self,
        ticket_id: i32,
        request: SuggestionRequestDto,
    ) -> SuggestionResponseDto {
        let suggestions = suggestions::suggestions_for(request.category.as_deref());

        let context = request.context.as_deref().filter(|c| !c.is_empty());
        let category = request.category.as_deref().filter(|c| !c.is_empty());
        self.log_best_effort(CreateChatLogDto {
            ticket_id,
            message_type: ChatMessageType::Suggestion,
            user_message: format!(
                "Requested suggestions for context: {}, category: {}",
                context.unwrap_or("general"),
                category.unwrap_or("general")
            ),
            ai_response: format!(
                "Generated {} suggestions: {}",
                suggestions.len(),
                suggestions.join("; ")
            ),
            voice_transcription: None,
            session_id: Some(format!("suggestions_{}", Utc::now().timestamp_millis())),
        })
        .await;

        SuggestionResponseDto {
            suggestions,
            context: format!("Generated suggestions for ticket #{}", ticket_id),
        }
    }

    /// Record an exchange; failures are logged and swallowed
    async fn log_best_effort(&self, log: CreateChatLogDto) {
        let ticket_id = log.ticket_id;
        let message_type = log.message_type;
        if let Err(e) = self.chat_logs.create(log).await {
            tracing::warn!(
                "Failed to log {} interaction for ticket {}: {}",
                message_type,
                ticket_id,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::lazy_pool;
    use sqlx::PgPool;

    fn service(pool: PgPool, seed: u64) -> AssistantService {
        AssistantService::with_rng(
            Arc::new(ChatLogService::new(pool)),
            StdRng::seed_from_u64(seed),
        )
    }

    #[tokio::test]
    async fn test_chat_succeeds_when_logging_fails() {
        let service = service(lazy_pool(), 1);
        let response = service
            .chat(ChatRequestDto {
                message: "The fan has a fault".to_string(),
                ticket_id: Some(3),
                is_voice_message: false,
            })
            .await;

        assert!(response.success);
        assert_eq!(response.message.sender, MessageSender::Llm);
        assert!(response.message.text.contains("The fan has a fault"));
        assert!(response.message.text.contains("ticket #3"));
    }

    #[tokio::test]
    async fn test_chat_with_ticket_zero_has_no_ticket_trailer() {
        let response = service(lazy_pool(), 5)
            .chat(ChatRequestDto {
                message: "The fan has a fault".to_string(),
                ticket_id: Some(0),
                is_voice_message: false,
            })
            .await;

        assert!(response.success);
        assert!(!response.message.text.contains("This guidance is specifically for ticket"));
    }

    #[tokio::test]
    async fn test_same_seed_same_chat_text() {
        let request = ChatRequestDto {
            message: "where is the manual".to_string(),
            ticket_id: None,
            is_voice_message: false,
        };
        let a = service(lazy_pool(), 42).chat(request.clone()).await;
        let b = service(lazy_pool(), 42).chat(request).await;
        assert_eq!(a.message.text, b.message.text);
    }

    #[tokio::test]
    async fn test_suggestions_context_names_ticket() {
        let response = service(lazy_pool(), 1)
            .suggestions(
                17,
                SuggestionRequestDto {
                    context: None,
                    category: Some("electrical".to_string()),
                },
            )
            .await;
        assert_eq!(response.context, "Generated suggestions for ticket #17");
        assert_eq!(response.suggestions.len(), 8);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_exchanges_are_logged_against_ticket(pool: PgPool) {
        let ticket_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO tickets (title, assigned_technician_id) VALUES ('Seed', 1) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        let chat_logs = Arc::new(ChatLogService::new(pool));
        let service = AssistantService::with_rng(Arc::clone(&chat_logs), StdRng::seed_from_u64(9));

        service
            .chat(ChatRequestDto {
                message: "safety first".to_string(),
                ticket_id: Some(ticket_id),
                is_voice_message: true,
            })
            .await;
        service
            .voice_recording(
                voice::AudioUpload {
                    file_name: "a.webm".to_string(),
                    mime_type: "audio/webm".to_string(),
                    size: 10,
                },
                Some(ticket_id),
            )
            .await;
        service
            .suggestions(ticket_id, SuggestionRequestDto::default())
            .await;

        let stats = chat_logs.stats(ticket_id).await.unwrap();
        assert_eq!(stats.voice_messages, 2);
        assert_eq!(stats.suggestion_requests, 1);

        let logs = chat_logs.list_by_ticket(ticket_id, None, None).await.unwrap();
        let voice_log = logs
            .iter()
            .find(|l| l.voice_transcription.is_some())
            .unwrap();
        assert_eq!(
            voice_log.voice_transcription.as_deref(),
            Some("Check the pressure readings on the main valve")
        );
        assert!(voice_log
            .session_id
            .as_deref()
            .unwrap()
            .starts_with("voice_session_"));

        let suggestion_log = logs
            .iter()
            .find(|l| l.message_type == ChatMessageType::Suggestion)
            .unwrap();
        assert_eq!(
            suggestion_log.user_message,
            "Requested suggestions for context: general, category: general"
        );
    }
}
