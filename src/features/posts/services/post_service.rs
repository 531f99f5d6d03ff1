use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::posts::dtos::{CreatePostDto, UpdatePostDto};
use crate::features::posts::models::Post;

const POST_COLUMNS: &str = "id, title, content, author, created_at, updated_at";

/// Service for post operations
pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first
    pub async fn list(&self) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts ORDER BY created_at DESC, id DESC",
            POST_COLUMNS
        );

        sqlx::query_as::<_, Post>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list posts: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>> {
        let sql = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);

        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get post by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn create(&self, dto: CreatePostDto) -> Result<Post> {
        let sql = format!(
            "INSERT INTO posts (title, content, author) VALUES ($1, $2, $3) RETURNING {}",
            POST_COLUMNS
        );

        sqlx::query_as::<_, Post>(&sql)
            .bind(dto.title)
            .bind(dto.content)
            .bind(dto.author)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create post: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Update the supplied fields; an empty update is rejected
    pub async fn update(&self, id: i32, dto: UpdatePostDto) -> Result<Option<Post>> {
        if dto.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE posts SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = dto.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(content) = dto.content {
                set.push("content = ").push_bind_unseparated(content);
            }
            if let Some(author) = dto.author {
                set.push("author = ").push_bind_unseparated(author);
            }
            set.push("updated_at = CURRENT_TIMESTAMP");
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" RETURNING ").push(POST_COLUMNS);

        query
            .build_query_as::<Post>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update post: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete post: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> CreatePostDto {
        CreatePostDto {
            title: title.to_string(),
            content: "Body".to_string(),
            author: "Dana".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_post_crud(pool: PgPool) {
        let service = PostService::new(pool);

        let first = service.create(new_post("First")).await.unwrap();
        let second = service.create(new_post("Second")).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        let updated = service
            .update(
                first.id,
                UpdatePostDto {
                    title: Some("First, edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "First, edited");
        assert_eq!(updated.author, "Dana");

        assert!(service.delete(first.id).await.unwrap());
        assert!(service.get_by_id(first.id).await.unwrap().is_none());
        assert!(service
            .update(first.id, UpdatePostDto { author: Some("x".to_string()), ..Default::default() })
            .await
            .unwrap()
            .is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_empty_update_is_rejected(pool: PgPool) {
        let service = PostService::new(pool);
        let post = service.create(new_post("Only")).await.unwrap();
        let result = service.update(post.id, UpdatePostDto::default()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
