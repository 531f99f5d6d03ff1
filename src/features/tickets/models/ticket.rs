use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use utoipa::ToSchema;

use crate::features::tickets::models::TicketAttachmentSummary;

/// Ticket priority enum matching database enum.
///
/// Declaration order is the database ordering: `ORDER BY priority DESC`
/// yields urgent first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "ticket_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
            TicketPriority::Urgent => write!(f, "urgent"),
        }
    }
}

/// Ticket status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ticket_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Assigned => write!(f, "assigned"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Completed => write!(f, "completed"),
            TicketStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for ticket
#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
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
}

/// Ticket row joined with its attachments aggregated into a JSON array
#[derive(Debug, Clone, FromRow)]
pub struct TicketWithAttachments {
    #[sqlx(flatten)]
    pub ticket: Ticket,
    pub attachments: Json<Vec<TicketAttachmentSummary>>,
}
