use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::posts::models::Post;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponseDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponseDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            author: p.author,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1, max = 255))]
    pub author: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub author: Option<String>,
}

impl UpdatePostDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_requires_all_fields() {
        assert!(serde_json::from_str::<CreatePostDto>(r#"{"title": "t", "content": "c"}"#).is_err());

        let dto: CreatePostDto =
            serde_json::from_str(r#"{"title": "t", "content": "c", "author": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_post_partial() {
        let dto: UpdatePostDto = serde_json::from_str(r#"{"author": "Sam"}"#).unwrap();
        assert!(!dto.is_empty());
        assert!(UpdatePostDto::default().is_empty());
    }
}
