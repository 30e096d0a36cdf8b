use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    AdminLoginRequestDto, AdminLoginResponse, SessionView,
};
use crate::modules::cv::application::domain::entities::CvFile;
use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::modules::message::adapter::incoming::web::routes::{ContactFormDto, ContactStatusView};
use crate::modules::message::application::domain::entities::{ConnectionStatus, ContactMessage};
use crate::modules::message::application::ports::incoming::use_cases::InboxSnapshot;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::modules::profile_image::application::domain::entities::ProfileImage;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::skill::application::domain::entities::{Skill, SkillGroup, SkillInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public portfolio, contact form and admin content management",
    ),
    paths(
        // Public
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::message::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::message::adapter::incoming::web::routes::contact_status_handler,

        // Admin session
        crate::modules::auth::adapter::incoming::web::routes::admin_login_handler,
        crate::modules::auth::adapter::incoming::web::routes::admin_logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::admin_session_handler,

        // Messages
        crate::modules::message::adapter::incoming::web::routes::list_messages_handler,
        crate::modules::message::adapter::incoming::web::routes::refresh_messages_handler,
        crate::modules::message::adapter::incoming::web::routes::get_message_handler,
        crate::modules::message::adapter::incoming::web::routes::delete_message_handler,
        crate::modules::message::adapter::incoming::web::routes::export_messages_handler,

        // Content
        crate::modules::profile::adapter::incoming::web::routes::get_personal_info_handler,
        crate::modules::profile::adapter::incoming::web::routes::upsert_personal_info_handler,
        crate::modules::skill::adapter::incoming::web::routes::list_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::delete_skill_handler,
        crate::modules::education::adapter::incoming::web::routes::list_education_handler,
        crate::modules::education::adapter::incoming::web::routes::create_education_handler,
        crate::modules::education::adapter::incoming::web::routes::update_education_handler,
        crate::modules::education::adapter::incoming::web::routes::delete_education_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Files
        crate::modules::cv::adapter::incoming::web::routes::list_cv_files_handler,
        crate::modules::cv::adapter::incoming::web::routes::get_active_cv_handler,
        crate::modules::cv::adapter::incoming::web::routes::upload_cv_handler,
        crate::modules::cv::adapter::incoming::web::routes::set_active_cv_handler,
        crate::modules::cv::adapter::incoming::web::routes::delete_cv_handler,
        crate::modules::profile_image::adapter::incoming::web::routes::list_profile_images_handler,
        crate::modules::profile_image::adapter::incoming::web::routes::get_active_profile_image_handler,
        crate::modules::profile_image::adapter::incoming::web::routes::upload_profile_image_handler,
        crate::modules::profile_image::adapter::incoming::web::routes::set_active_profile_image_handler,
        crate::modules::profile_image::adapter::incoming::web::routes::delete_profile_image_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            AdminLoginRequestDto,
            AdminLoginResponse,
            SessionView,

            ContactFormDto,
            ContactStatusView,
            ContactMessage,
            ConnectionStatus,
            InboxSnapshot,

            Portfolio,
            PersonalInfo,
            PersonalInfoInput,
            Skill,
            SkillInput,
            SkillGroup,
            Education,
            EducationInput,
            Project,
            ProjectInput,
            CvFile,
            ProfileImage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio read"),
        (name = "contact", description = "Public contact form"),
        (name = "admin-auth", description = "Admin session endpoints"),
        (name = "admin-messages", description = "Contact message inbox"),
        (name = "admin-profile", description = "Personal info"),
        (name = "admin-skills", description = "Skills"),
        (name = "admin-education", description = "Education history"),
        (name = "admin-projects", description = "Projects"),
        (name = "admin-cv", description = "CV files"),
        (name = "admin-profile-images", description = "Profile images"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/portfolio"));
        assert!(doc.paths.paths.contains_key("/api/admin/login"));
        assert!(doc.paths.paths.contains_key("/api/admin/cv/{id}/active"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
