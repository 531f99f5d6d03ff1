use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::assistant::handlers;
use crate::features::assistant::services::AssistantService;
use crate::shared::constants::MAX_AUDIO_FILE_SIZE;

/// Body limit for voice uploads, leaving room for multipart framing
const VOICE_BODY_LIMIT: usize = MAX_AUDIO_FILE_SIZE + 1024 * 1024;

/// Create routes for the assistant feature
pub fn routes(service: Arc<AssistantService>) -> Router {
    Router::new()
        .route("/api/tickets/chat", post(handlers::send_chat_message))
        .route(
            "/api/tickets/voice-recording",
            post(handlers::process_voice_recording).layer(DefaultBodyLimit::max(VOICE_BODY_LIMIT)),
        )
        .route(
            "/api/tickets/{id}/ai-suggestions",
            post(handlers::get_ticket_suggestions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assistant::services::responder;
    use crate::features::chat_logs::services::ChatLogService;
    use crate::shared::test_helpers::{body_json, lazy_pool, post_json, post_multipart, Part};
    use axum::http::StatusCode;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    fn app() -> Router {
        let chat_logs = Arc::new(ChatLogService::new(lazy_pool()));
        routes(Arc::new(AssistantService::with_rng(
            chat_logs,
            StdRng::seed_from_u64(2024),
        )))
    }

    #[tokio::test]
    async fn test_chat_troubleshoot_reply() {
        let text = "Getting an error on the compressor";
        let response = post_json(app(), "/api/tickets/chat", &json!({"message": text})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"]["sender"], "llm");
        assert_eq!(body["message"]["isVoiceMessage"], false);

        let reply = body["message"]["text"].as_str().unwrap();
        assert!(reply.contains(text));
        let category = responder::match_category(text).unwrap();
        assert_eq!(category.name, "troubleshoot");
        assert!(category
            .templates
            .iter()
            .any(|t| responder::tests::starts_with_rendered(t, text, reply)));
    }

    #[tokio::test]
    async fn test_chat_with_ticket_survives_logging_failure() {
        let response = post_json(
            app(),
            "/api/tickets/chat",
            &json!({"message": "hello", "ticketId": 8}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"]["text"]
            .as_str()
            .unwrap()
            .contains("This guidance is specifically for ticket #8."));
    }

    #[tokio::test]
    async fn test_chat_with_ticket_zero_is_untied() {
        let response = post_json(
            app(),
            "/api/tickets/chat",
            &json!({"message": "hello", "ticketId": 0}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(!body["message"]["text"]
            .as_str()
            .unwrap()
            .contains("This guidance is specifically for ticket"));

        let response = post_json(
            app(),
            "/api/tickets/chat",
            &json!({"message": "hello", "ticketId": -2}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chat_requires_message() {
        let response = post_json(app(), "/api/tickets/chat", &json!({"ticketId": 1})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_voice_requires_audio_part() {
        let response = post_multipart(
            app(),
            "/api/tickets/voice-recording",
            &[Part {
                name: "ticketId",
                file: None,
                data: b"5".to_vec(),
            }],
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "No audio file provided", "status": 400})
        );
    }

    #[tokio::test]
    async fn test_voice_rejects_non_audio() {
        let response = post_multipart(
            app(),
            "/api/tickets/voice-recording",
            &[Part {
                name: "audio",
                file: Some(("notes.txt", "text/plain")),
                data: b"hello".to_vec(),
            }],
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Only audio files are allowed"
        );
    }

    #[tokio::test]
    async fn test_voice_rejects_oversized_audio() {
        let response = post_multipart(
            app(),
            "/api/tickets/voice-recording",
            &[Part {
                name: "audio",
                file: Some(("long.webm", "audio/webm")),
                data: vec![0u8; MAX_AUDIO_FILE_SIZE + 1],
            }],
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_voice_rejects_non_numeric_ticket() {
        let response = post_multipart(
            app(),
            "/api/tickets/voice-recording",
            &[
                Part {
                    name: "audio",
                    file: Some(("a.webm", "audio/webm")),
                    data: vec![0u8; 10],
                },
                Part {
                    name: "ticketId",
                    file: None,
                    data: b"twelve".to_vec(),
                },
            ],
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_voice_pressure_recording() {
        let response = post_multipart(
            app(),
            "/api/tickets/voice-recording",
            &[Part {
                name: "audio",
                file: Some(("valve.webm", "audio/webm")),
                data: vec![7u8; 20],
            }],
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["transcription"],
            "Check the pressure readings on the main valve"
        );
        assert!(body["processedText"]
            .as_str()
            .unwrap()
            .starts_with("Based on your pressure-related inquiry"));
        assert_eq!(body["message"], body["processedText"]);
        assert_eq!(body["processingTime"], 2.3);
        assert_eq!(body["sources"].as_array().unwrap().len(), 4);
        assert_eq!(body["fileInfo"]["filename"], "valve.webm");
        assert_eq!(body["fileInfo"]["size_bytes"], 20);
        assert_eq!(body["fileInfo"]["duration_estimate"], 0);
    }

    #[tokio::test]
    async fn test_suggestions_for_category() {
        let response = post_json(
            app(),
            "/api/tickets/12/ai-suggestions",
            &json!({"category": "Mechanical"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["context"], "Generated suggestions for ticket #12");
        assert_eq!(
            body["suggestions"][0],
            "What's the proper torque specification?"
        );
    }
}
