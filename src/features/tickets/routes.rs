use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::chat_logs::services::ChatLogService;
use crate::features::tickets::handlers::{self, TicketState};
use crate::features::tickets::services::TicketService;

/// Create routes for tickets and technician-scoped ticket views
pub fn routes(ticket_service: Arc<TicketService>, chat_log_service: Arc<ChatLogService>) -> Router {
    let state = TicketState {
        tickets: ticket_service,
        chat_logs: chat_log_service,
    };

    Router::new()
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(handlers::get_ticket)
                .put(handlers::update_ticket)
                .delete(handlers::delete_ticket),
        )
        .route(
            "/api/tickets/{id}/attachments",
            post(handlers::add_ticket_attachment),
        )
        .route(
            "/api/technicians/{technician_id}/tickets",
            get(handlers::list_technician_tickets),
        )
        .route(
            "/api/technicians/{technician_id}/tickets/{ticket_id}",
            get(handlers::get_technician_ticket),
        )
        .route(
            "/api/technicians/{technician_id}/tickets/{ticket_id}/status",
            patch(handlers::update_technician_ticket_status),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{body_json, delete, get, json_request, lazy_pool, post_json};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::PgPool;

    fn app_with(pool: PgPool) -> Router {
        routes(
            Arc::new(TicketService::new(pool.clone())),
            Arc::new(ChatLogService::new(pool)),
        )
    }

    fn app() -> Router {
        app_with(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_priority() {
        let response = post_json(
            app(),
            "/api/tickets",
            &json!({"title": "Leak", "assigned_technician_id": 1, "priority": "critical"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_create_requires_title_and_technician() {
        let response = post_json(app(), "/api/tickets", &json!({"title": "Leak"})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = post_json(
            app(),
            "/api/tickets",
            &json!({"title": "", "assigned_technician_id": 1}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["details"]["requestBody.title"].is_object());
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_status_filter() {
        let response = get(app(), "/api/tickets?status=archived").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_empty_update_is_bad_request() {
        let response = json_request(app(), Method::PUT, "/api/tickets/1", &json!({})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"error": "No fields to update", "status": 400})
        );
    }

    #[tokio::test]
    async fn test_non_numeric_ticket_id_is_unprocessable() {
        let response = get(app(), "/api/tickets/abc").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = get(app(), "/api/technicians/abc/tickets/1").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_form_default_payload_passes_validation() {
        // No database behind the lazy pool: getting past validation means a 500
        let response = post_json(
            app(),
            "/api/tickets",
            &json!({
                "title": "Boiler",
                "description": "",
                "priority": "medium",
                "assigned_technician_id": 1,
                "customer_name": "",
                "customer_phone": "",
                "location": "",
                "scheduled_date": "2025-01-15T10:30"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_status_patch_rejects_unknown_status() {
        let response = json_request(
            app(),
            Method::PATCH,
            "/api/technicians/1/tickets/1/status",
            &json!({"status": "done"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_ticket_lifecycle(pool: PgPool) {
        let response = post_json(
            app_with(pool.clone()),
            "/api/tickets",
            &json!({"title": "Boiler leak", "assigned_technician_id": 12}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["priority"], "medium");
        assert_eq!(created["status"], "assigned");
        let id = created["id"].as_i64().unwrap();

        let response = get(app_with(pool.clone()), &format!("/api/tickets/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["attachments"], json!([]));
        assert_eq!(fetched["ai_chat_logs"], json!([]));

        let response = get(
            app_with(pool.clone()),
            &format!("/api/technicians/13/tickets/{}", id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = json_request(
            app_with(pool.clone()),
            Method::PATCH,
            &format!("/api/technicians/12/tickets/{}/status", id),
            &json!({"status": "completed"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Ticket status updated to completed"})
        );

        let response = delete(app_with(pool.clone()), &format!("/api/tickets/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Ticket deleted successfully"})
        );

        let response = delete(app_with(pool), &format!("/api/tickets/{}", id)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Ticket not found", "status": 404})
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_create_from_form_defaults(pool: PgPool) {
        let response = post_json(
            app_with(pool),
            "/api/tickets",
            &json!({
                "title": "Boiler",
                "description": "",
                "priority": "medium",
                "assigned_technician_id": 1,
                "customer_name": "",
                "customer_phone": "",
                "location": "",
                "scheduled_date": "2025-01-15T10:30"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_eq!(created["title"], "Boiler");
        assert!(created["description"].is_null());
        assert!(created["location"].is_null());
        assert!(created["customer_name"].is_null());
        assert!(created["customer_phone"].is_null());
        assert_eq!(created["scheduled_date"], "2025-01-15T10:30:00Z");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_non_owner_status_patch_is_not_found(pool: PgPool) {
        let response = post_json(
            app_with(pool.clone()),
            "/api/tickets",
            &json!({"title": "Gate motor", "assigned_technician_id": 3}),
        )
        .await;
        let id = body_json(response).await["id"].as_i64().unwrap();

        let response = json_request(
            app_with(pool),
            Method::PATCH,
            &format!("/api/technicians/4/tickets/{}/status", id),
            &json!({"status": "in_progress"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Ticket not found or not assigned to this technician"
        );
    }
}
