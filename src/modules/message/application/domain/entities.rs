use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A stored contact form submission. Never updated after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactMessage {
    pub const DEMO_ID: &'static str = "demo-1";

    /// Placeholder shown while the inbox cannot reach the backend.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            id: Some(Self::DEMO_ID.to_string()),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            subject: "Test Message".to_string(),
            message: "This is a demo message to show the admin panel functionality.".to_string(),
            created_at: Some(now),
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Case-insensitive substring match over name, email and subject.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.name, &self.email, &self.subject]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("All fields are required")]
    MissingFields,
}

/// Raw form input as the visitor typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed local validation. Every field is trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactForm> for NewContactMessage {
    type Error = ContactValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let email = form.email.trim();
        let subject = form.subject.trim();
        let message = form.message.trim();

        if [name, email, subject, message].iter().any(|f| f.is_empty()) {
            return Err(ContactValidationError::MissingFields);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// Where the inbox last got its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Checking,
    Connected,
    Error,
    Demo,
}
