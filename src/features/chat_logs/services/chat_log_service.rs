use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::database::is_foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::chat_logs::dtos::{ChatLogQueryParams, CreateChatLogDto};
use crate::features::chat_logs::models::{ChatLog, ChatLogStats};
use crate::shared::constants::{DEFAULT_CHAT_LOG_LIMIT, MAX_PAGE_SIZE};

const CHAT_LOG_COLUMNS: &str = "id, ticket_id, message_type, user_message, ai_response, \
     voice_transcription, session_id, created_at";

/// Service for AI chat log persistence
pub struct ChatLogService {
    pool: PgPool,
}

impl ChatLogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a chat log. Empty transcription or session id is stored as NULL.
    pub async fn create(&self, dto: CreateChatLogDto) -> Result<ChatLog> {
        let sql = format!(
            r#"
            INSERT INTO ai_chat_logs (
                ticket_id, message_type, user_message, ai_response,
                voice_transcription, session_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CHAT_LOG_COLUMNS
        );

        sqlx::query_as::<_, ChatLog>(&sql)
            .bind(dto.ticket_id)
            .bind(dto.message_type)
            .bind(dto.user_message)
            .bind(dto.ai_response)
            .bind(dto.voice_transcription.filter(|s| !s.is_empty()))
            .bind(dto.session_id.filter(|s| !s.is_empty()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::NotFound("Ticket not found".to_string());
                }
                tracing::error!("Failed to create chat log: {:?}", e);
                AppError::Database(e)
            })
    }

    /// A ticket's chat logs, newest first
    pub async fn list_by_ticket(
        &self,
        ticket_id: i32,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ChatLog>> {
        let sql = format!(
            "SELECT {} FROM ai_chat_logs WHERE ticket_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
            CHAT_LOG_COLUMNS
        );

        sqlx::query_as::<_, ChatLog>(&sql)
            .bind(ticket_id)
            .bind(page_limit(limit))
            .bind(offset.unwrap_or(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch chat logs by ticket: {:?}", e);
                AppError::Database(e)
            })
    }

    /// A session's chat logs in conversation order
    pub async fn list_by_session(
        &self,
        session_id: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ChatLog>> {
        let sql = format!(
            "SELECT {} FROM ai_chat_logs WHERE session_id = $1 \
             ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3",
            CHAT_LOG_COLUMNS
        );

        sqlx::query_as::<_, ChatLog>(&sql)
            .bind(session_id)
            .bind(page_limit(limit))
            .bind(offset.unwrap_or(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch chat logs by session: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Flexible listing; each clause is added only for a non-zero, non-empty filter value
    pub async fn list(&self, params: &ChatLogQueryParams) -> Result<Vec<ChatLog>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(CHAT_LOG_COLUMNS);
        query.push(" FROM ai_chat_logs WHERE 1=1");

        if let Some(ticket_id) = params.ticket_id.filter(|id| *id != 0) {
            query.push(" AND ticket_id = ").push_bind(ticket_id);
        }
        if let Some(message_type) = params.message_type {
            query.push(" AND message_type = ").push_bind(message_type);
        }
        if let Some(session_id) = params.session_id.as_deref().filter(|s| !s.is_empty()) {
            query
                .push(" AND session_id = ")
                .push_bind(session_id.to_string());
        }

        query.push(" ORDER BY created_at DESC, id DESC");

        if let Some(limit) = params.limit.filter(|l| *l != 0) {
            query.push(" LIMIT ").push_bind(limit.min(MAX_PAGE_SIZE));
        }
        if let Some(offset) = params.offset.filter(|o| *o != 0) {
            query.push(" OFFSET ").push_bind(offset);
        }

        query
            .build_query_as::<ChatLog>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch chat logs: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Counts per message type and first/last interaction for a ticket
    pub async fn stats(&self, ticket_id: i32) -> Result<ChatLogStats> {
        sqlx::query_as::<_, ChatLogStats>(
            r#"
            SELECT
                COUNT(*) AS total_messages,
                COUNT(*) FILTER (WHERE message_type = 'chat') AS chat_messages,
                COUNT(*) FILTER (WHERE message_type = 'voice') AS voice_messages,
                COUNT(*) FILTER (WHERE message_type = 'suggestion') AS suggestion_requests,
                MIN(created_at) AS first_interaction,
                MAX(created_at) AS last_interaction
            FROM ai_chat_logs
            WHERE ticket_id = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch chat log stats: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ChatLog>> {
        let sql = format!("SELECT {} FROM ai_chat_logs WHERE id = $1", CHAT_LOG_COLUMNS);

        sqlx::query_as::<_, ChatLog>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get chat log by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM ai_chat_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete chat log: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every chat log of a ticket, returning how many went
    pub async fn delete_by_ticket(&self, ticket_id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM ai_chat_logs WHERE ticket_id = $1")
            .bind(ticket_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete chat logs for ticket: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Deleted {} chat logs for ticket {}",
            result.rows_affected(),
            ticket_id
        );

        Ok(result.rows_affected())
    }
}

fn page_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_CHAT_LOG_LIMIT).clamp(1, MAX_PAGE_SIZE)
}
