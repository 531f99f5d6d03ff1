use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::chat_logs::dtos::ChatLogResponseDto;
use crate::features::tickets::models::{
    Ticket, TicketAttachment, TicketAttachmentSummary, TicketPriority, TicketStatus,
    TicketWithAttachments,
};
use crate::shared::types::{
    deserialize_optional_text, deserialize_optional_timestamp, deserialize_some_text,
    deserialize_some_timestamp,
};

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: i32,
    pub ticket_number: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assigned_technician_id: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<TicketAttachmentSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_chat_logs: Option<Vec<ChatLogResponseDto>>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            ticket_number: t.ticket_number,
            title: t.title,
            description: t.description,
            location: t.location,
            priority: t.priority,
            status: t.status,
            assigned_technician_id: t.assigned_technician_id,
            customer_name: t.customer_name,
            customer_phone: t.customer_phone,
            scheduled_date: t.scheduled_date,
            created_at: t.created_at,
            updated_at: t.updated_at,
            attachments: None,
            ai_chat_logs: None,
        }
    }
}

impl From<TicketWithAttachments> for TicketResponseDto {
    fn from(row: TicketWithAttachments) -> Self {
        let mut dto = TicketResponseDto::from(row.ticket);
        dto.attachments = Some(row.attachments.0);
        dto
    }
}

impl TicketResponseDto {
    pub fn with_chat_logs(mut self, chat_logs: Vec<ChatLogResponseDto>) -> Self {
        self.ai_chat_logs = Some(chat_logs);
        self
    }
}

/// Request DTO for creating a ticket.
///
/// Blank optional text fields are treated as absent. `scheduled_date` also
/// accepts an offset-less `YYYY-MM-DDTHH:MM[:SS]`, read as UTC.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = 255))]
    pub location: Option<String>,
    /// Defaults to `medium`
    pub priority: Option<TicketPriority>,
    #[validate(range(min = 1, message = "assigned_technician_id must be a positive integer"))]
    pub assigned_technician_id: i32,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = 255))]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = 50))]
    pub customer_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Request DTO for a partial ticket update.
///
/// Nullable columns accept an explicit `null` (or a blank string) to clear the
/// stored value; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some_text")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_text")]
    #[validate(length(max = 255))]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    #[serde(default, deserialize_with = "deserialize_some_text")]
    #[validate(length(max = 255))]
    #[schema(value_type = Option<String>)]
    pub customer_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_text")]
    #[validate(length(max = 50))]
    #[schema(value_type = Option<String>)]
    pub customer_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_timestamp")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTicketDto {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.customer_name.is_none()
            && self.customer_phone.is_none()
            && self.scheduled_date.is_none()
    }
}

/// Query params for listing tickets
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct TicketQueryParams {
    /// Filter by status
    pub status: Option<TicketStatus>,
    /// Filter by assigned technician
    #[validate(range(min = 1))]
    pub technician_id: Option<i32>,
    /// Filter by priority
    pub priority: Option<TicketPriority>,
}

/// Query params for a technician's dispatch queue
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
pub struct TechnicianTicketsQuery {
    /// Filter by status
    pub status: Option<TicketStatus>,
}

/// Request DTO for a technician status change
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketStatusDto {
    pub status: TicketStatus,
}

/// Request DTO for registering an attachment on a ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAttachmentDto {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1))]
    pub file_path: String,
    #[validate(length(max = 100))]
    pub file_type: Option<String>,
}

/// Response DTO for a newly registered attachment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentResponseDto {
    pub id: i32,
    pub ticket_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TicketAttachment> for AttachmentResponseDto {
    fn from(a: TicketAttachment) -> Self {
        Self {
            id: a.id,
            ticket_id: a.ticket_id,
            file_name: a.file_name,
            file_path: a.file_path,
            file_type: a.file_type,
            created_at: a.created_at,
        }
    }
}
