//! Profile domain entities
//!
//! Experience and education entries are embedded in their profile and stored
//! as JSON arrays, newest first.

use chrono::{DateTime, NaiveDate, Utc};
use devlink_common::Error;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Experience or education id not present on the profile
    #[error("No record found")]
    RecordNotFound,
}

impl From<ProfileError> for Error {
    fn from(err: ProfileError) -> Self {
        Error::BadRequest(err.to_string())
    }
}

/// Social network links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Editable top-level profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Social,
}

/// Profile entity, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Json<Social>,
    pub experience: Json<Vec<Experience>>,
    pub education: Json<Vec<Education>>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skills: fields.skills,
            bio: fields.bio,
            github_username: fields.github_username,
            social: Json(fields.social),
            experience: Json(Vec::new()),
            education: Json(Vec::new()),
            created_at: Utc::now(),
        }
    }

    /// Overwrite with new field values. Optional fields left out keep their
    /// current value; social links are replaced as a whole.
    pub fn apply(&mut self, fields: ProfileFields) {
        self.status = fields.status;
        self.skills = fields.skills;
        self.social = Json(fields.social);

        if fields.company.is_some() {
            self.company = fields.company;
        }
        if fields.website.is_some() {
            self.website = fields.website;
        }
        if fields.location.is_some() {
            self.location = fields.location;
        }
        if fields.bio.is_some() {
            self.bio = fields.bio;
        }
        if fields.github_username.is_some() {
            self.github_username = fields.github_username;
        }
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Result<Experience, ProfileError> {
        let index = self
            .experience
            .iter()
            .position(|e| e.id == id)
            .ok_or(ProfileError::RecordNotFound)?;
        Ok(self.experience.remove(index))
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    pub fn remove_education(&mut self, id: Uuid) -> Result<Education, ProfileError> {
        let index = self
            .education
            .iter()
            .position(|e| e.id == id)
            .ok_or(ProfileError::RecordNotFound)?;
        Ok(self.education.remove(index))
    }
}

/// Split a comma-separated skills list, trimming entries and dropping blanks
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
