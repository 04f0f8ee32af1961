//! In-memory profile store for tests and database-less local runs

use async_trait::async_trait;
use devlink_common::RepositoryError;
use parking_lot::Mutex;
use uuid::Uuid;

use super::ProfileStore;
use crate::domain::entities::Profile;

/// Profiles kept in creation order
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        Ok(self
            .profiles
            .lock()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, RepositoryError> {
        Ok(self.profiles.lock().clone())
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError> {
        let mut profiles = self.profiles.lock();
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(stored) => {
                stored.company = profile.company.clone();
                stored.website = profile.website.clone();
                stored.location = profile.location.clone();
                stored.status = profile.status.clone();
                stored.skills = profile.skills.clone();
                stored.bio = profile.bio.clone();
                stored.github_username = profile.github_username.clone();
                stored.social = profile.social.clone();
            }
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn save(&self, profile: &Profile) -> Result<(), RepositoryError> {
        let mut profiles = self.profiles.lock();
        let stored = profiles
            .iter_mut()
            .find(|p| p.user_id == profile.user_id)
            .ok_or(RepositoryError::NotFound)?;
        stored.experience = profile.experience.clone();
        stored.education = profile.education.clone();
        Ok(())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, RepositoryError> {
        let mut profiles = self.profiles.lock();
        let before = profiles.len();
        profiles.retain(|p| p.user_id != user_id);
        Ok(profiles.len() < before)
    }
}
