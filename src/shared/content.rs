//! Errors shared by the admin content managers (profile, skills, education,
//! projects, CV files, profile images).

use actix_web::HttpResponse;
use thiserror::Error;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::shared::supabase::SupabaseError;

/// What a content repository can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// Backend message, kept verbatim.
    #[error("{0}")]
    Backend(String),
}

impl From<SupabaseError> for RepositoryError {
    fn from(e: SupabaseError) -> Self {
        RepositoryError::Backend(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Backend(String),
}

impl From<RepositoryError> for ContentError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Backend(message) => ContentError::Backend(message),
        }
    }
}

impl ContentError {
    pub fn validation(message: impl Into<String>) -> Self {
        ContentError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str) -> Self {
        ContentError::NotFound { entity }
    }

    /// Envelope for a failed manager call. Backend failures are logged here
    /// so handlers don't have to.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ContentError::Validation(message) => {
                ApiResponse::bad_request("VALIDATION_ERROR", message)
            }
            ContentError::NotFound { .. } => ApiResponse::not_found("NOT_FOUND", &self.to_string()),
            ContentError::Backend(message) => {
                error!(error = %message, "Backend call failed");
                ApiResponse::backend_error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(
            ContentError::validation("Level must be between 0 and 100")
                .to_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContentError::not_found("Skill").to_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ContentError::Backend("boom".into()).to_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(ContentError::not_found("Project").to_string(), "Project not found");
    }

    #[test]
    fn backend_message_survives_conversion() {
        let err: ContentError = RepositoryError::Backend("JWT expired".into()).into();
        assert_eq!(err, ContentError::Backend("JWT expired".into()));
    }
}
