use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EducationInput {
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[schema(example = "2019-09-01")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub is_current: bool,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EducationInput {
    pub fn normalized(self) -> Result<Self, ContentError> {
        let degree = self.degree.trim().to_string();
        let institution = self.institution.trim().to_string();
        if degree.is_empty() || institution.is_empty() {
            return Err(ContentError::validation("Degree and institution are required"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ContentError::validation("End date cannot be before start date"));
            }
        }

        // An ongoing programme has no end date.
        let end_date = if self.is_current { None } else { self.end_date };

        Ok(Self {
            degree,
            institution,
            location: trimmed(self.location),
            start_date: self.start_date,
            end_date,
            cgpa: trimmed(self.cgpa),
            description: trimmed(self.description),
            achievements: self
                .achievements
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            is_current: self.is_current,
        })
    }
}
