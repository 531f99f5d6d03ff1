use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for ticket attachment, as written
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct TicketAttachment {
    pub id: i32,
    pub ticket_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Attachment entry embedded in ticket reads.
///
/// `file_path` is deliberately not part of the read shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketAttachmentSummary {
    pub id: i32,
    pub file_name: String,
    pub file_type: Option<String>,
}
