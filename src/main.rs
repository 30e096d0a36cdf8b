pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::auth::adapter::outgoing::credential_check_static::StaticCredentialCheck;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::session_store_memory::InMemorySessionStore;
use crate::modules::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::modules::auth::adapter::outgoing::supabase_auth_provider::SupabaseAuthProvider;
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, SessionStore, TokenProvider,
};
use crate::modules::auth::application::services::AdminSessionGate;
use crate::modules::auth::application::use_cases::{
    check_session::CheckSessionService, login_admin::LoginAdminService,
    logout_admin::LogoutAdminService,
};
use crate::modules::auth::application::AdminAuthUseCases;
use crate::modules::cv::adapter::outgoing::cv_file_repository_supabase::SupabaseCvFileRepository;
use crate::modules::cv::application::service::CvService;
use crate::modules::cv::application::CvUseCases;
use crate::modules::education::adapter::outgoing::education_repository_supabase::SupabaseEducationRepository;
use crate::modules::education::application::service::EducationService;
use crate::modules::education::application::EducationUseCases;
use crate::modules::message::adapter::outgoing::contact_message_repository_supabase::SupabaseContactMessageRepository;
use crate::modules::message::adapter::outgoing::messages_config::MessagesConfig;
use crate::modules::message::application::service::{
    MessagesPanel, ProbeBackendService, SubmitContactService,
};
use crate::modules::message::application::MessageUseCases;
use crate::modules::portfolio::application::ports::incoming::GetPortfolioUseCase;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::profile::adapter::outgoing::personal_info_repository_supabase::SupabasePersonalInfoRepository;
use crate::modules::profile::application::service::{
    GetPersonalInfoService, UpsertPersonalInfoService,
};
use crate::modules::profile::application::ProfileUseCases;
use crate::modules::profile_image::adapter::outgoing::profile_image_repository_supabase::SupabaseProfileImageRepository;
use crate::modules::profile_image::application::service::ProfileImageService;
use crate::modules::profile_image::application::ProfileImageUseCases;
use crate::modules::project::adapter::outgoing::project_repository_supabase::SupabaseProjectRepository;
use crate::modules::project::application::service::ProjectService;
use crate::modules::project::application::ProjectUseCases;
use crate::modules::skill::adapter::outgoing::skill_repository_supabase::SupabaseSkillRepository;
use crate::modules::skill::application::service::SkillService;
use crate::modules::skill::application::SkillUseCases;
use crate::shared::api::{custom_json_config, upload_payload_config, UploadConfig};
use crate::shared::object_storage::SupabaseObjectStorage;
use crate::shared::supabase::{SupabaseClient, SupabaseConfig};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AdminAuthUseCases,
    pub messages: MessageUseCases,
    pub profile: ProfileUseCases,
    pub skills: SkillUseCases,
    pub education: EducationUseCases,
    pub projects: ProjectUseCases,
    pub cv: CvUseCases,
    pub profile_images: ProfileImageUseCases,
    pub portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub sessions: Arc<dyn SessionStore>,
}

#[cfg(not(tarpaulin_include))]
fn session_store_from_env() -> Arc<dyn SessionStore> {
    match env::var("REDIS_URL").ok().filter(|u| !u.trim().is_empty()) {
        Some(redis_url) => {
            if redis_url.starts_with("rediss://") {
                let _ = rustls::crypto::ring::default_provider().install_default();
            }
            let pool = Config::from_url(&redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .expect("Failed to create Redis pool");
            info!("Admin sessions stored in Redis");
            Arc::new(RedisSessionStore::new(Arc::new(pool)))
        }
        None => {
            warn!("REDIS_URL not set; admin sessions are kept in memory and lost on restart");
            Arc::new(InMemorySessionStore::new())
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // Environtment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %env, "Starting application...");

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Hosted backend
    let supabase_config = SupabaseConfig::from_env();
    let client = SupabaseClient::new(&supabase_config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Admin session
    let jwt_config = JwtConfig::from_env();
    let session_ttl = jwt_config.session_ttl();
    let tokens: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(jwt_config));
    let sessions = session_store_from_env();
    let provider: Arc<dyn AuthProvider> = Arc::new(SupabaseAuthProvider::new(client.clone()));
    let gate = Arc::new(AdminSessionGate::new(
        Arc::clone(&sessions),
        Arc::clone(&provider),
    ));
    let _auth_listener = gate.listen();

    let auth = AdminAuthUseCases {
        login: Arc::new(LoginAdminService::new(
            StaticCredentialCheck::from_env(),
            Arc::clone(&provider),
            Arc::clone(&sessions),
            Arc::clone(&tokens),
            Arc::clone(&gate),
            session_ttl,
        )),
        logout: Arc::new(LogoutAdminService::new(
            Arc::clone(&provider),
            Arc::clone(&sessions),
            Arc::clone(&gate),
        )),
        check_session: Arc::new(CheckSessionService::new(
            Arc::clone(&tokens),
            Arc::clone(&gate),
        )),
        gate,
    };

    // Contact messages
    let messages_config = MessagesConfig::from_env();
    let message_repo =
        SupabaseContactMessageRepository::new(client.clone(), messages_config.poll_interval);
    let panel = Arc::new(MessagesPanel::new(
        message_repo.clone(),
        messages_config.demo_fallback,
    ));
    let _mounted_panel = panel.mount();
    let messages = MessageUseCases {
        submit: Arc::new(SubmitContactService::new(message_repo.clone())),
        probe: Arc::new(ProbeBackendService::new(message_repo)),
        inbox: panel,
    };

    // Content
    let profile_repo = SupabasePersonalInfoRepository::new(client.clone());
    let profile = ProfileUseCases {
        get: Arc::new(GetPersonalInfoService::new(profile_repo.clone())),
        upsert: Arc::new(UpsertPersonalInfoService::new(profile_repo)),
    };

    let skill_service = Arc::new(SkillService::new(SupabaseSkillRepository::new(client.clone())));
    let skills = SkillUseCases {
        list: skill_service.clone(),
        create: skill_service.clone(),
        update: skill_service.clone(),
        delete: skill_service,
    };

    let education_service = Arc::new(EducationService::new(SupabaseEducationRepository::new(
        client.clone(),
    )));
    let education = EducationUseCases {
        list: education_service.clone(),
        create: education_service.clone(),
        update: education_service.clone(),
        delete: education_service,
    };

    let project_service = Arc::new(ProjectService::new(SupabaseProjectRepository::new(
        client.clone(),
    )));
    let projects = ProjectUseCases {
        list: project_service.clone(),
        create: project_service.clone(),
        update: project_service.clone(),
        delete: project_service,
    };

    // Files
    let storage = SupabaseObjectStorage::new(client.clone());
    let cv_service = Arc::new(CvService::new(
        SupabaseCvFileRepository::new(client.clone()),
        storage.clone(),
    ));
    let cv = CvUseCases {
        list: cv_service.clone(),
        get_active: cv_service.clone(),
        upload: cv_service.clone(),
        set_active: cv_service.clone(),
        delete: cv_service,
    };

    let image_service = Arc::new(ProfileImageService::new(
        SupabaseProfileImageRepository::new(client.clone()),
        storage,
    ));
    let profile_images = ProfileImageUseCases {
        list: image_service.clone(),
        get_active: image_service.clone(),
        upload: image_service.clone(),
        set_active: image_service.clone(),
        delete: image_service,
    };

    let portfolio = Arc::new(GetPortfolioService::new(
        profile.clone(),
        skills.clone(),
        projects.clone(),
        education.clone(),
        cv.clone(),
        profile_images.clone(),
    ));

    let state = AppState {
        auth,
        messages,
        profile,
        skills,
        education,
        projects,
        cv,
        profile_images,
        portfolio,
        sessions,
    };

    let upload_limit = UploadConfig::from_env().max_bytes;
    info!(%server_url, upload_limit, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(upload_payload_config(upload_limit))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        auth, cv, education, message, portfolio, profile, profile_image, project, skill,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(message::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(message::adapter::incoming::web::routes::contact_status_handler);
    // Admin session
    cfg.service(auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(auth::adapter::incoming::web::routes::admin_logout_handler);
    cfg.service(auth::adapter::incoming::web::routes::admin_session_handler);
    // Messages (export before {id})
    cfg.service(message::adapter::incoming::web::routes::export_messages_handler);
    cfg.service(message::adapter::incoming::web::routes::refresh_messages_handler);
    cfg.service(message::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(message::adapter::incoming::web::routes::get_message_handler);
    cfg.service(message::adapter::incoming::web::routes::delete_message_handler);
    // Profile
    cfg.service(profile::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(profile::adapter::incoming::web::routes::upsert_personal_info_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::delete_skill_handler);
    // Education
    cfg.service(education::adapter::incoming::web::routes::list_education_handler);
    cfg.service(education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(education::adapter::incoming::web::routes::delete_education_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // CV (active before {id})
    cfg.service(cv::adapter::incoming::web::routes::get_active_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::list_cv_files_handler);
    cfg.service(cv::adapter::incoming::web::routes::upload_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::set_active_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::delete_cv_handler);
    // Profile images
    cfg.service(profile_image::adapter::incoming::web::routes::get_active_profile_image_handler);
    cfg.service(profile_image::adapter::incoming::web::routes::list_profile_images_handler);
    cfg.service(profile_image::adapter::incoming::web::routes::upload_profile_image_handler);
    cfg.service(profile_image::adapter::incoming::web::routes::set_active_profile_image_handler);
    cfg.service(profile_image::adapter::incoming::web::routes::delete_profile_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
