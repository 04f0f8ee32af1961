//! PostgreSQL profile repository

use async_trait::async_trait;
use devlink_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use super::ProfileStore;
use crate::domain::entities::Profile;

const PROFILE_COLUMNS: &str = "id, user_id, company, website, location, status, skills, bio, \
     github_username, social, experience, education, created_at";

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        let query = format!("SELECT {} FROM profiles WHERE user_id = $1", PROFILE_COLUMNS);
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn list(&self) -> Result<Vec<Profile>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM profiles ORDER BY created_at ASC",
            PROFILE_COLUMNS
        );
        let profiles = sqlx::query_as::<_, Profile>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, company, website, location, status, skills, bio,
                                  github_username, social, experience, education, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                social = EXCLUDED.social
            "#,
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.status)
        .bind(&profile.skills)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(&profile.social)
        .bind(&profile.experience)
        .bind(&profile.education)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, profile: &Profile) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET experience = $2, education = $3
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.experience)
        .bind(&profile.education)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
