use utoipa::{Modify, OpenApi};

use crate::core::app::{self, HealthResponse};
use crate::features::assistant::{dtos as assistant_dtos, handlers as assistant_handlers};
use crate::features::chat_logs::{
    dtos as chat_logs_dtos, handlers as chat_logs_handlers, models as chat_logs_models,
};
use crate::features::posts::{dtos as posts_dtos, handlers as posts_handlers};
use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::shared::types::{ErrorResponse, FieldError, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        app::health_check,
        // Tickets
        tickets_handlers::list_tickets,
        tickets_handlers::get_ticket,
        tickets_handlers::create_ticket,
        tickets_handlers::update_ticket,
        tickets_handlers::delete_ticket,
        tickets_handlers::add_ticket_attachment,
        // Technicians
        tickets_handlers::list_technician_tickets,
        tickets_handlers::get_technician_ticket,
        tickets_handlers::update_technician_ticket_status,
        // Chat logs
        chat_logs_handlers::list_ticket_chat_logs,
        chat_logs_handlers::create_ticket_chat_log,
        chat_logs_handlers::get_ticket_chat_log_stats,
        chat_logs_handlers::list_chat_logs,
        chat_logs_handlers::list_session_chat_logs,
        chat_logs_handlers::get_chat_log,
        chat_logs_handlers::delete_chat_log,
        // Assistant
        assistant_handlers::send_chat_message,
        assistant_handlers::process_voice_recording,
        assistant_handlers::get_ticket_suggestions,
        // Posts
        posts_handlers::list_posts,
        posts_handlers::get_post,
        posts_handlers::create_post,
        posts_handlers::update_post,
        posts_handlers::delete_post,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            MessageResponse,
            HealthResponse,
            tickets_models::TicketPriority,
            tickets_models::TicketStatus,
            tickets_models::TicketAttachmentSummary,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketDto,
            tickets_dtos::UpdateTicketStatusDto,
            tickets_dtos::CreateAttachmentDto,
            tickets_dtos::AttachmentResponseDto,
            chat_logs_models::ChatMessageType,
            chat_logs_dtos::ChatLogResponseDto,
            chat_logs_dtos::CreateChatLogRequestDto,
            chat_logs_dtos::ChatLogStatsDto,
            assistant_dtos::ChatRequestDto,
            assistant_dtos::ChatMessageDto,
            assistant_dtos::ChatResponseDto,
            assistant_dtos::MessageSender,
            assistant_dtos::UploadAudioDto,
            assistant_dtos::VoiceFileInfoDto,
            assistant_dtos::VoiceRecordingResponseDto,
            assistant_dtos::SuggestionRequestDto,
            assistant_dtos::SuggestionResponseDto,
            posts_dtos::PostResponseDto,
            posts_dtos::CreatePostDto,
            posts_dtos::UpdatePostDto,
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "tickets", description = "Field-service tickets and attachments"),
        (name = "technicians", description = "Technician-scoped ticket views"),
        (name = "chat-logs", description = "AI assistant interaction history"),
        (name = "assistant", description = "AI assistant chat, voice and suggestions"),
        (name = "posts", description = "Legacy posts"),
    ),
    info(
        title = "FieldOps API",
        version = "1.0.0",
        description = "Ticket management API for field technicians with an AI assistant",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
