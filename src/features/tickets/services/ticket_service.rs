use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::database::is_foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateAttachmentDto, CreateTicketDto, UpdateTicketDto};
use crate::features::tickets::models::{
    Ticket, TicketAttachment, TicketPriority, TicketStatus, TicketWithAttachments,
};

const TICKET_COLUMNS: &str = "id, ticket_number, title, description, location, priority, status, \
     assigned_technician_id, customer_name, customer_phone, scheduled_date, created_at, updated_at";

/// Ticket columns plus attachments aggregated into a JSON array (`[]` when none)
const TICKET_WITH_ATTACHMENTS_SELECT: &str = r#"
    SELECT
        t.id, t.ticket_number, t.title, t.description, t.location, t.priority, t.status,
        t.assigned_technician_id, t.customer_name, t.customer_phone, t.scheduled_date,
        t.created_at, t.updated_at,
        COALESCE(
            JSON_AGG(
                JSON_BUILD_OBJECT(
                    'id', att.id,
                    'file_name', att.file_name,
                    'file_type', att.file_type
                ) ORDER BY att.id
            ) FILTER (WHERE att.id IS NOT NULL),
            '[]'::json
        ) AS attachments
    FROM tickets t
    LEFT JOIN ticket_attachments att ON t.id = att.ticket_id
"#;

/// Optional, AND-combined filters for listing tickets
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub technician_id: Option<i32>,
    pub priority: Option<TicketPriority>,
}

/// Service for ticket operations
pub struct TicketService {
    pool: PgPool,
}

impl TicketService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get ticket by ID with its attachments
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TicketWithAttachments>> {
        let mut query = QueryBuilder::<Postgres>::new(TICKET_WITH_ATTACHMENTS_SELECT);
        query.push(" WHERE t.id = ").push_bind(id);
        query.push(" GROUP BY t.id");

        query
            .build_query_as::<TicketWithAttachments>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get ticket by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    /// List tickets, newest first
    pub async fn list(&self, filter: TicketFilter) -> Result<Vec<TicketWithAttachments>> {
        let mut query = QueryBuilder::<Postgres>::new(TICKET_WITH_ATTACHMENTS_SELECT);
        query.push(" WHERE 1=1");

        if let Some(status) = filter.status {
            query.push(" AND t.status = ").push_bind(status);
        }
        if let Some(technician_id) = filter.technician_id {
            query
                .push(" AND t.assigned_technician_id = ")
                .push_bind(technician_id);
        }
        if let Some(priority) = filter.priority {
            query.push(" AND t.priority = ").push_bind(priority);
        }

        query.push(" GROUP BY t.id ORDER BY t.created_at DESC, t.id DESC");

        query
            .build_query_as::<TicketWithAttachments>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tickets: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Dispatch queue for a technician: most urgent first, then soonest scheduled
    pub async fn list_for_technician(
        &self,
        technician_id: i32,
        status: Option<TicketStatus>,
    ) -> Result<Vec<TicketWithAttachments>> {
        let mut query = QueryBuilder::<Postgres>::new(TICKET_WITH_ATTACHMENTS_SELECT);
        query
            .push(" WHERE t.assigned_technician_id = ")
            .push_bind(technician_id);

        if let Some(status) = status {
            query.push(" AND t.status = ").push_bind(status);
        }

        query.push(" GROUP BY t.id ORDER BY t.priority DESC, t.scheduled_date ASC");

        query
            .build_query_as::<TicketWithAttachments>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch technician tickets: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Create a ticket; priority falls back to `medium`
    pub async fn create(&self, dto: CreateTicketDto) -> Result<Ticket> {
        let sql = format!(
            r#"
            INSERT INTO tickets (
                title, description, location, priority, assigned_technician_id,
                customer_name, customer_phone, scheduled_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            TICKET_COLUMNS
        );

        let ticket = sqlx::query_as::<_, Ticket>(&sql)
            .bind(dto.title)
            .bind(dto.description)
            .bind(dto.location)
            .bind(dto.priority.unwrap_or_default())
            .bind(dto.assigned_technician_id)
            .bind(dto.customer_name)
            .bind(dto.customer_phone)
            .bind(dto.scheduled_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create ticket: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Ticket created: id={}, number={}, technician={}",
            ticket.id,
            ticket.ticket_number,
            ticket.assigned_technician_id
        );

        Ok(ticket)
    }

    /// Partial update touching only the supplied fields.
    ///
    /// An empty update is rejected before any SQL runs.
    pub async fn update(&self, id: i32, dto: UpdateTicketDto) -> Result<Option<Ticket>> {
        if dto.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE tickets SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = dto.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(description) = dto.description {
                set.push("description = ").push_bind_unseparated(description);
            }
            if let Some(location) = dto.location {
                set.push("location = ").push_bind_unseparated(location);
            }
            if let Some(priority) = dto.priority {
                set.push("priority = ").push_bind_unseparated(priority);
            }
            if let Some(status) = dto.status {
                set.push("status = ").push_bind_unseparated(status);
            }
            if let Some(customer_name) = dto.customer_name {
                set.push("customer_name = ").push_bind_unseparated(customer_name);
            }
            if let Some(customer_phone) = dto.customer_phone {
                set.push("customer_phone = ").push_bind_unseparated(customer_phone);
            }
            if let Some(scheduled_date) = dto.scheduled_date {
                set.push("scheduled_date = ").push_bind_unseparated(scheduled_date);
            }
            set.push("updated_at = CURRENT_TIMESTAMP");
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" RETURNING ").push(TICKET_COLUMNS);

        query
            .build_query_as::<Ticket>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update ticket: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Change only the status.
    ///
    /// With `technician_id`, a ticket owned by someone else matches no row and
    /// comes back as `None`, same as a missing id.
    pub async fn update_status(
        &self,
        id: i32,
        status: TicketStatus,
        technician_id: Option<i32>,
    ) -> Result<Option<Ticket>> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE tickets SET status = ");
        query.push_bind(status);
        query.push(", updated_at = CURRENT_TIMESTAMP WHERE id = ");
        query.push_bind(id);

        if let Some(technician_id) = technician_id {
            query
                .push(" AND assigned_technician_id = ")
                .push_bind(technician_id);
        }

        query.push(" RETURNING ").push(TICKET_COLUMNS);

        let ticket = query
            .build_query_as::<Ticket>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update ticket status: {:?}", e);
                AppError::Database(e)
            })?;

        if let Some(ref t) = ticket {
            tracing::info!("Ticket {} status changed to {}", t.id, t.status);
        }

        Ok(ticket)
    }

    /// Delete a ticket, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Register an attachment on a ticket
    pub async fn add_attachment(
        &self,
        ticket_id: i32,
        dto: CreateAttachmentDto,
    ) -> Result<TicketAttachment> {
        sqlx::query_as::<_, TicketAttachment>(
            r#"
            INSERT INTO ticket_attachments (ticket_id, file_name, file_path, file_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, ticket_id, file_name, file_path, file_type, created_at
            "#,
        )
        .bind(ticket_id)
        .bind(dto.file_name)
        .bind(dto.file_path)
        .bind(dto.file_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return AppError::NotFound("Ticket not found".to_string());
            }
            tracing::error!("Failed to add ticket attachment: {:?}", e);
            AppError::Database(e)
        })
    }
}
