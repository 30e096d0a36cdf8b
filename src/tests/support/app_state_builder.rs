use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::session_store_memory::InMemorySessionStore;
use crate::modules::auth::application::ports::outgoing::SessionStore;
use crate::modules::auth::application::services::AdminSessionGate;
use crate::modules::auth::application::use_cases::check_session::CheckSessionUseCase;
use crate::modules::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::auth::application::AdminAuthUseCases;
use crate::modules::cv::application::CvUseCases;
use crate::modules::education::application::EducationUseCases;
use crate::modules::message::application::ports::incoming::use_cases::MessageInbox;
use crate::modules::message::application::service::{
    MessagesPanel, ProbeBackendService, SubmitContactService,
};
use crate::modules::message::application::MessageUseCases;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::profile::application::ProfileUseCases;
use crate::modules::profile_image::application::ProfileImageUseCases;
use crate::modules::project::application::ProjectUseCases;
use crate::modules::skill::application::SkillUseCases;
use crate::tests::support::fake_auth_provider::FakeAuthProvider;
use crate::tests::support::fake_message_repository::FakeMessageRepository;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    check_session: Arc<dyn CheckSessionUseCase + Send + Sync>,
    messages: MessageUseCases,
    profile: ProfileUseCases,
    skills: SkillUseCases,
    education: EducationUseCases,
    projects: ProjectUseCases,
    cv: CvUseCases,
    profile_images: ProfileImageUseCases,
}

fn message_use_cases(repo: FakeMessageRepository) -> MessageUseCases {
    MessageUseCases {
        submit: Arc::new(SubmitContactService::new(repo.clone())),
        probe: Arc::new(ProbeBackendService::new(repo.clone())),
        inbox: Arc::new(MessagesPanel::new(repo, true)),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: Arc::new(StubLoginAdminUseCase::unreachable()),
            logout: Arc::new(StubLogoutAdminUseCase::ok()),
            check_session: Arc::new(StubCheckSessionUseCase::unauthenticated()),
            messages: message_use_cases(FakeMessageRepository::new()),
            profile: StubProfile::empty().use_cases(),
            skills: StubSkills::with(vec![]).use_cases(),
            education: StubEducation::with(vec![]).use_cases(),
            projects: StubProjects::with(vec![]).use_cases(),
            cv: StubCvFiles::with(vec![]).use_cases(),
            profile_images: StubProfileImages::with(vec![]).use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_check_session(mut self, uc: impl CheckSessionUseCase + 'static) -> Self {
        self.check_session = Arc::new(uc);
        self
    }

    /// Wires submit, probe and a fresh (unloaded) inbox to one repository.
    pub fn with_message_repository(mut self, repo: FakeMessageRepository) -> Self {
        self.messages = message_use_cases(repo);
        self
    }

    pub fn with_inbox<I: MessageInbox + 'static>(mut self, inbox: Arc<I>) -> Self {
        self.messages.inbox = inbox;
        self
    }

    pub fn with_profile(mut self, profile: ProfileUseCases) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_skills(mut self, skills: SkillUseCases) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_education(mut self, education: EducationUseCases) -> Self {
        self.education = education;
        self
    }

    pub fn with_projects(mut self, projects: ProjectUseCases) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_cv(mut self, cv: CvUseCases) -> Self {
        self.cv = cv;
        self
    }

    pub fn with_profile_images(mut self, profile_images: ProfileImageUseCases) -> Self {
        self.profile_images = profile_images;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let gate = Arc::new(AdminSessionGate::new(
            Arc::clone(&sessions),
            Arc::new(FakeAuthProvider::new()),
        ));

        let portfolio = Arc::new(GetPortfolioService::new(
            self.profile.clone(),
            self.skills.clone(),
            self.projects.clone(),
            self.education.clone(),
            self.cv.clone(),
            self.profile_images.clone(),
        ));

        web::Data::new(AppState {
            auth: AdminAuthUseCases {
                login: self.login,
                logout: self.logout,
                check_session: self.check_session,
                gate,
            },
            messages: self.messages,
            profile: self.profile,
            skills: self.skills,
            education: self.education,
            projects: self.projects,
            cv: self.cv,
            profile_images: self.profile_images,
            portfolio,
            sessions,
        })
    }
}
