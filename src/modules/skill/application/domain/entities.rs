use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

pub const SKILL_CATEGORIES: [&str; 6] = [
    "Frontend Development",
    "Backend Development",
    "Database & Data",
    "Tools & Technologies",
    "AI & Machine Learning",
    "Soft Skills",
];

pub const DEFAULT_SKILL_LEVEL: i32 = 50;

/// Gradient theme token the frontend renders the level bar with.
pub const DEFAULT_SKILL_COLOR: &str = "from-blue-500 to-cyan-500";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i32,
    #[serde(default)]
    pub icon: Option<String>,
    pub color: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_level() -> i32 {
    DEFAULT_SKILL_LEVEL
}

fn default_color() -> String {
    DEFAULT_SKILL_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillInput {
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = "Backend Development")]
    pub category: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

impl SkillInput {
    pub fn normalized(self) -> Result<Self, ContentError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ContentError::validation("Skill name is required"));
        }
        if !SKILL_CATEGORIES.contains(&self.category.as_str()) {
            return Err(ContentError::validation(format!(
                "Unknown skill category: {}",
                self.category
            )));
        }
        if !(0..=100).contains(&self.level) {
            return Err(ContentError::validation("Skill level must be between 0 and 100"));
        }
        let color = self.color.trim().to_string();
        if color.is_empty() {
            return Err(ContentError::validation("Skill color is required"));
        }

        Ok(Self {
            name,
            category: self.category,
            level: self.level,
            icon: self
                .icon
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
            color,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Groups keep the order in which their category first appears, and skills
/// keep their order inside a group.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }

    groups
}
