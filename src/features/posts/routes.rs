use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::posts::handlers;
use crate::features::posts::services::PostService;

/// Create routes for the posts feature
pub fn routes(service: Arc<PostService>) -> Router {
    Router::new()
        .route(
            "/api/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/api/posts/{id}",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .with_state(service)
}
