//! PostgreSQL post repository

use async_trait::async_trait;
use devlink_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use super::PostStore;
use crate::domain::entities::Post;

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn create(&self, post: &Post) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id)
        .bind(post.user_id)
        .bind(&post.text)
        .bind(&post.name)
        .bind(&post.avatar)
        .bind(&post.likes)
        .bind(&post.comments)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, text, name, avatar, likes, comments, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, text, name, avatar, likes, comments, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn save(&self, post: &Post) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET likes = $2, comments = $3
            WHERE id = $1
            "#,
        )
        .bind(post.id)
        .bind(&post.likes)
        .bind(&post.comments)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
