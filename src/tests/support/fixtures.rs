use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cv::application::domain::entities::CvFile;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::message::application::domain::entities::ContactMessage;
use crate::modules::message::application::ports::incoming::use_cases::MessageInbox;
use crate::modules::message::application::service::MessagesPanel;
use crate::modules::profile_image::application::domain::entities::ProfileImage;
use crate::modules::project::application::domain::entities::{Project, DEFAULT_PROJECT_STATUS};
use crate::modules::skill::application::domain::entities::{Skill, DEFAULT_SKILL_COLOR};
use crate::tests::support::fake_message_repository::FakeMessageRepository;

pub fn contact_message(id: &str, name: &str) -> ContactMessage {
    ContactMessage {
        id: Some(id.to_string()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: format!("Hello from {name}"),
        message: "Hi, there".to_string(),
        created_at: Some(Utc::now()),
    }
}

/// A panel that already pulled whatever the repository serves.
pub async fn loaded_inbox(repo: FakeMessageRepository) -> Arc<MessagesPanel<FakeMessageRepository>> {
    let panel = Arc::new(MessagesPanel::new(repo, true));
    panel.refresh().await;
    panel
}

pub fn skill(name: &str, category: &str) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        level: 80,
        icon: None,
        color: DEFAULT_SKILL_COLOR.to_string(),
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

pub fn education(degree: &str) -> Education {
    Education {
        id: Uuid::new_v4(),
        degree: degree.to_string(),
        institution: "Uni".to_string(),
        location: None,
        start_date: NaiveDate::from_ymd_opt(2016, 9, 1),
        end_date: None,
        cgpa: None,
        description: None,
        achievements: vec![],
        is_current: false,
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

pub fn project(title: &str, sort_order: i32) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        subtitle: None,
        description: "Blog engine".to_string(),
        image_url: None,
        tech_stack: vec!["Rust".to_string()],
        category: "fullstack".to_string(),
        features: vec![],
        demo_url: None,
        github_url: None,
        status: DEFAULT_PROJECT_STATUS.to_string(),
        is_featured: false,
        sort_order,
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

pub fn cv_file(filename: &str, is_active: bool) -> CvFile {
    CvFile {
        id: Uuid::new_v4(),
        filename: filename.to_string(),
        file_url: format!("https://storage.test/files/cv/{filename}"),
        file_size: Some(1024),
        mime_type: Some("application/pdf".to_string()),
        is_active,
        uploaded_at: Some(Utc::now()),
    }
}

pub fn profile_image(filename: &str, is_active: bool) -> ProfileImage {
    ProfileImage {
        id: Uuid::new_v4(),
        filename: filename.to_string(),
        image_url: format!("https://storage.test/images/profile/{filename}"),
        alt_text: Some("Profile Image".to_string()),
        is_active,
        uploaded_at: Some(Utc::now()),
    }
}
