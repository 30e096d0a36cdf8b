use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

pub const DEFAULT_PROJECT_STATUS: &str = "Completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    DEFAULT_PROJECT_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectInput {
    #[schema(example = "Portfolio CMS")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub tech_stack: Vec<String>,
    #[schema(example = "fullstack")]
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl ProjectInput {
    pub fn normalized(self) -> Result<Self, ContentError> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();
        let category = self.category.trim().to_string();
        if title.is_empty() || description.is_empty() || category.is_empty() {
            return Err(ContentError::validation(
                "Title, description and category are required",
            ));
        }
        let status = match self.status.trim() {
            "" => default_status(),
            s => s.to_string(),
        };

        Ok(Self {
            title,
            subtitle: optional(self.subtitle),
            description,
            image_url: optional(self.image_url),
            tech_stack: list(self.tech_stack),
            category,
            features: list(self.features),
            demo_url: optional(self.demo_url),
            github_url: optional(self.github_url),
            status,
            is_featured: self.is_featured,
            sort_order: self.sort_order,
        })
    }
}
