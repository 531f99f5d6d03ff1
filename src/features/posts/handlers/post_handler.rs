use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, ValidatedJson};
use crate::features::posts::dtos::{CreatePostDto, PostResponseDto, UpdatePostDto};
use crate::features::posts::services::PostService;
use crate::shared::types::{ErrorResponse, MessageResponse};

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "List of posts", body = Vec<PostResponseDto>)
    ),
    tag = "posts"
)]
pub async fn list_posts(
    State(service): State<Arc<PostService>>,
) -> Result<Json<Vec<PostResponseDto>>> {
    let posts = service.list().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = PostResponseDto),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn get_post(
    State(service): State<Arc<PostService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PostResponseDto>> {
    let post = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostResponseDto),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn create_post(
    State(service): State<Arc<PostService>>,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<PostResponseDto>)> {
    let post = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostResponseDto),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn update_post(
    State(service): State<Arc<PostService>>,
    AppPath(id): AppPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> Result<Json<PostResponseDto>> {
    let post = service
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn delete_post(
    State(service): State<Arc<PostService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    if !service.delete(id).await? {
        return Err(AppError::NotFound("Post not found".to_string()));
    }
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
