use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

/// The site owner's profile. There is at most one row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonalInfo {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub cgpa: String,
    pub teaching_experience: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable profile fields. Every text field may be blank except that a
/// non-blank email must be a valid address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonalInfoInput {
    pub name: String,
    pub title: String,
    #[schema(example = "owner@example.com")]
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub cgpa: String,
    pub teaching_experience: String,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl PersonalInfoInput {
    /// Trims text, drops blank links and checks the few hard rules.
    pub fn normalized(self) -> Result<Self, ContentError> {
        let email = self.email.trim().to_string();
        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            return Err(ContentError::validation("Email address is not valid"));
        }
        if self.years_experience < 0 || self.projects_completed < 0 {
            return Err(ContentError::validation("Counters cannot be negative"));
        }

        Ok(Self {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            email,
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            bio: self.bio.trim().to_string(),
            github_url: blank_to_none(self.github_url),
            linkedin_url: blank_to_none(self.linkedin_url),
            website_url: blank_to_none(self.website_url),
            years_experience: self.years_experience,
            projects_completed: self.projects_completed,
            cgpa: self.cgpa.trim().to_string(),
            teaching_experience: self.teaching_experience.trim().to_string(),
        })
    }
}
