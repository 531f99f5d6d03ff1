use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::chat_logs::handlers;
use crate::features::chat_logs::services::ChatLogService;

/// Create routes for the chat logs feature
pub fn routes(service: Arc<ChatLogService>) -> Router {
    Router::new()
        .route(
            "/api/tickets/{id}/chat-logs",
            get(handlers::list_ticket_chat_logs).post(handlers::create_ticket_chat_log),
        )
        .route(
            "/api/tickets/{id}/chat-logs/stats",
            get(handlers::get_ticket_chat_log_stats),
        )
        .route("/api/chat-logs", get(handlers::list_chat_logs))
        .route(
            "/api/chat-logs/sessions/{session_id}",
            get(handlers::list_session_chat_logs),
        )
        .route(
            "/api/chat-logs/{id}",
            get(handlers::get_chat_log).delete(handlers::delete_chat_log),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{body_json, get, lazy_pool, post_json};
    use axum::http::StatusCode;
    use serde_json::json;

    fn app() -> Router {
        routes(Arc::new(ChatLogService::new(lazy_pool())))
    }

    #[tokio::test]
    async fn test_non_numeric_chat_log_id_is_unprocessable() {
        let response = get(app(), "/api/chat-logs/abc").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]["path"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_message_type_is_unprocessable() {
        let response = post_json(
            app(),
            "/api/tickets/1/chat-logs",
            &json!({"message_type": "fax", "user_message": "hi", "ai_response": "hello"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["details"]["requestBody"].is_object());
    }

    #[tokio::test]
    async fn test_empty_user_message_is_unprocessable() {
        let response = post_json(
            app(),
            "/api/tickets/1/chat-logs",
            &json!({"message_type": "chat", "user_message": "", "ai_response": "hello"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["details"]["requestBody.user_message"].is_object());
    }

    #[tokio::test]
    async fn test_oversized_page_is_unprocessable() {
        let response = get(app(), "/api/tickets/1/chat-logs?limit=5000").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["details"]["query.limit"].is_object());
    }

    #[tokio::test]
    async fn test_database_outage_renders_generic_500() {
        let response = get(app(), "/api/chat-logs/1").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Internal Server Error"}));
    }
}
