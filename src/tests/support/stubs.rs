use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AdminCredentials, SessionState};
use crate::modules::auth::application::use_cases::check_session::CheckSessionUseCase;
use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminUseCase, LoginError, LoginOutcome,
};
use crate::modules::auth::application::use_cases::logout_admin::{LogoutAdminUseCase, LogoutError};
use crate::modules::cv::application::domain::entities::{CvFile, NewCvFile};
use crate::modules::cv::application::ports::outgoing::CvFileRepository;
use crate::modules::cv::application::service::CvService;
use crate::modules::cv::application::CvUseCases;
use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::modules::education::application::service::EducationService;
use crate::modules::education::application::EducationUseCases;
use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::modules::profile::application::ports::outgoing::PersonalInfoRepository;
use crate::modules::profile::application::service::{
    GetPersonalInfoService, UpsertPersonalInfoService,
};
use crate::modules::profile::application::ProfileUseCases;
use crate::modules::profile_image::application::domain::entities::{NewProfileImage, ProfileImage};
use crate::modules::profile_image::application::ports::outgoing::ProfileImageRepository;
use crate::modules::profile_image::application::service::ProfileImageService;
use crate::modules::profile_image::application::ProfileImageUseCases;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::project::application::service::ProjectService;
use crate::modules::project::application::ProjectUseCases;
use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::modules::skill::application::service::SkillService;
use crate::modules::skill::application::SkillUseCases;
use crate::shared::activation::ActiveFlagStore;
use crate::shared::content::RepositoryError;
use crate::shared::object_storage::ObjectStorage;

// ========================= Admin session stubs =========================

#[derive(Clone)]
pub struct StubCheckSessionUseCase {
    state: SessionState,
}

impl StubCheckSessionUseCase {
    pub fn unauthenticated() -> Self {
        Self::returning(SessionState::Unauthenticated)
    }

    pub fn local_override() -> Self {
        Self::returning(SessionState::LocalOverride {
            session_id: Uuid::new_v4(),
        })
    }

    pub fn returning(state: SessionState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CheckSessionUseCase for StubCheckSessionUseCase {
    async fn execute(&self, _token: &str) -> SessionState {
        self.state.clone()
    }
}

#[derive(Clone)]
pub enum StubLoginAdminUseCase {
    LocalOverride(String),
    Error(LoginError),
    Unreachable,
}

impl StubLoginAdminUseCase {
    pub fn local_override(token: &str) -> Self {
        Self::LocalOverride(token.to_string())
    }

    pub fn error(error: LoginError) -> Self {
        Self::Error(error)
    }

    /// For requests that must be rejected before the use case runs.
    pub fn unreachable() -> Self {
        Self::Unreachable
    }
}

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _credentials: AdminCredentials) -> Result<LoginOutcome, LoginError> {
        match self {
            Self::LocalOverride(token) => Ok(LoginOutcome {
                token: token.clone(),
                expires_at: Utc::now() + Duration::hours(1),
                state: SessionState::LocalOverride {
                    session_id: Uuid::new_v4(),
                },
            }),
            Self::Error(e) => Err(e.clone()),
            Self::Unreachable => panic!("login use case should not be reached"),
        }
    }
}

#[derive(Clone)]
pub struct StubLogoutAdminUseCase {
    result: Result<(), LogoutError>,
    calls: Arc<AtomicUsize>,
}

impl StubLogoutAdminUseCase {
    pub fn ok() -> Self {
        Self {
            result: Ok(()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: LogoutError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _session_id: Uuid) -> Result<(), LogoutError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ========================= In-memory content tables =========================

/// Rows shared between a stub and every service built from it.
#[derive(Clone)]
struct Table<T> {
    rows: Arc<Mutex<Vec<T>>>,
    failure: Option<String>,
}

impl<T: Clone> Table<T> {
    fn with(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            failure: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            failure: Some(message.to_string()),
        }
    }

    fn reachable(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(message) => Err(RepositoryError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn push(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn replace(&self, matches: impl Fn(&T) -> bool, build: impl FnOnce(&T) -> T) -> Option<T> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows.iter_mut().find(|row| matches(row))?;
        let updated = build(slot);
        *slot = updated.clone();
        Some(updated)
    }

    fn remove(&self, keep: impl Fn(&T) -> bool) {
        self.rows.lock().unwrap().retain(|row| keep(row));
    }
}

// ========================= Profile =========================

#[derive(Clone)]
pub struct StubProfile {
    table: Table<PersonalInfo>,
}

impl StubProfile {
    pub fn empty() -> Self {
        Self {
            table: Table::with(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Table::failing(message),
        }
    }

    pub fn use_cases(&self) -> ProfileUseCases {
        ProfileUseCases {
            get: Arc::new(GetPersonalInfoService::new(self.clone())),
            upsert: Arc::new(UpsertPersonalInfoService::new(self.clone())),
        }
    }
}

#[async_trait]
impl PersonalInfoRepository for StubProfile {
    async fn get(&self) -> Result<Option<PersonalInfo>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot().into_iter().next())
    }

    async fn upsert(
        &self,
        id: Option<Uuid>,
        input: &PersonalInfoInput,
    ) -> Result<PersonalInfo, RepositoryError> {
        self.table.reachable()?;
        let id = id.unwrap_or_else(Uuid::new_v4);
        let saved = PersonalInfo {
            id,
            name: input.name.clone(),
            title: input.title.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            location: input.location.clone(),
            bio: input.bio.clone(),
            github_url: input.github_url.clone(),
            linkedin_url: input.linkedin_url.clone(),
            website_url: input.website_url.clone(),
            years_experience: input.years_experience,
            projects_completed: input.projects_completed,
            cgpa: input.cgpa.clone(),
            teaching_experience: input.teaching_experience.clone(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        self.table.remove(|row| row.id != id);
        Ok(self.table.push(saved))
    }
}

// ========================= Skills =========================

#[derive(Clone)]
pub struct StubSkills {
    table: Table<Skill>,
}

impl StubSkills {
    pub fn with(rows: Vec<Skill>) -> Self {
        Self {
            table: Table::with(rows),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Table::failing(message),
        }
    }

    pub fn rows(&self) -> Vec<Skill> {
        self.table.snapshot()
    }

    pub fn use_cases(&self) -> SkillUseCases {
        let service = Arc::new(SkillService::new(self.clone()));
        SkillUseCases {
            list: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

fn skill_from(id: Uuid, input: &SkillInput) -> Skill {
    Skill {
        id,
        name: input.name.clone(),
        category: input.category.clone(),
        level: input.level,
        icon: input.icon.clone(),
        color: input.color.clone(),
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

#[async_trait]
impl SkillRepository for StubSkills {
    async fn list(&self) -> Result<Vec<Skill>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot())
    }

    async fn create(&self, input: &SkillInput) -> Result<Skill, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.push(skill_from(Uuid::new_v4(), input)))
    }

    async fn update(&self, id: Uuid, input: &SkillInput) -> Result<Option<Skill>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.replace(|s| s.id == id, |s| skill_from(s.id, input)))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.reachable()?;
        self.table.remove(|s| s.id != id);
        Ok(())
    }
}

// ========================= Education =========================

#[derive(Clone)]
pub struct StubEducation {
    table: Table<Education>,
}

impl StubEducation {
    pub fn with(rows: Vec<Education>) -> Self {
        Self {
            table: Table::with(rows),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Table::failing(message),
        }
    }

    pub fn rows(&self) -> Vec<Education> {
        self.table.snapshot()
    }

    pub fn use_cases(&self) -> EducationUseCases {
        let service = Arc::new(EducationService::new(self.clone()));
        EducationUseCases {
            list: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

fn education_from(id: Uuid, input: &EducationInput) -> Education {
    Education {
        id,
        degree: input.degree.clone(),
        institution: input.institution.clone(),
        location: input.location.clone(),
        start_date: input.start_date,
        end_date: input.end_date,
        cgpa: input.cgpa.clone(),
        description: input.description.clone(),
        achievements: input.achievements.clone(),
        is_current: input.is_current,
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

#[async_trait]
impl EducationRepository for StubEducation {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot())
    }

    async fn create(&self, input: &EducationInput) -> Result<Education, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.push(education_from(Uuid::new_v4(), input)))
    }

    async fn update(
        &self,
        id: Uuid,
        input: &EducationInput,
    ) -> Result<Option<Education>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.replace(|e| e.id == id, |e| education_from(e.id, input)))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.reachable()?;
        self.table.remove(|e| e.id != id);
        Ok(())
    }
}

// ========================= Projects =========================

#[derive(Clone)]
pub struct StubProjects {
    table: Table<Project>,
}

impl StubProjects {
    pub fn with(rows: Vec<Project>) -> Self {
        Self {
            table: Table::with(rows),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Table::failing(message),
        }
    }

    pub fn rows(&self) -> Vec<Project> {
        self.table.snapshot()
    }

    pub fn use_cases(&self) -> ProjectUseCases {
        let service = Arc::new(ProjectService::new(self.clone()));
        ProjectUseCases {
            list: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

fn project_from(id: Uuid, input: &ProjectInput) -> Project {
    Project {
        id,
        title: input.title.clone(),
        subtitle: input.subtitle.clone(),
        description: input.description.clone(),
        image_url: input.image_url.clone(),
        tech_stack: input.tech_stack.clone(),
        category: input.category.clone(),
        features: input.features.clone(),
        demo_url: input.demo_url.clone(),
        github_url: input.github_url.clone(),
        status: input.status.clone(),
        is_featured: input.is_featured,
        sort_order: input.sort_order,
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

#[async_trait]
impl ProjectRepository for StubProjects {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        self.table.reachable()?;
        let mut rows = self.table.snapshot();
        rows.sort_by_key(|p| p.sort_order);
        Ok(rows)
    }

    async fn create(&self, input: &ProjectInput) -> Result<Project, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.push(project_from(Uuid::new_v4(), input)))
    }

    async fn update(
        &self,
        id: Uuid,
        input: &ProjectInput,
    ) -> Result<Option<Project>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.replace(|p| p.id == id, |p| project_from(p.id, input)))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.reachable()?;
        self.table.remove(|p| p.id != id);
        Ok(())
    }
}

// ========================= Uploaded files =========================

/// Records object names instead of storing bytes.
#[derive(Clone, Default)]
struct Bucket {
    objects: Arc<Mutex<Vec<String>>>,
}

impl Bucket {
    fn put(&self, bucket: &str, object: &str) -> String {
        self.objects.lock().unwrap().push(format!("{bucket}/{object}"));
        format!("https://storage.test/{bucket}/{object}")
    }

    fn names(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct StubCvFiles {
    table: Table<CvFile>,
    bucket: Bucket,
}

impl StubCvFiles {
    pub fn with(rows: Vec<CvFile>) -> Self {
        Self {
            table: Table::with(rows),
            bucket: Bucket::default(),
        }
    }

    pub fn rows(&self) -> Vec<CvFile> {
        self.table.snapshot()
    }

    pub fn stored_objects(&self) -> Vec<String> {
        self.bucket.names()
    }

    pub fn use_cases(&self) -> CvUseCases {
        let service = Arc::new(CvService::new(self.clone(), self.clone()));
        CvUseCases {
            list: service.clone(),
            get_active: service.clone(),
            upload: service.clone(),
            set_active: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl ActiveFlagStore for StubCvFiles {
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.table.snapshot().iter().any(|f| f.id == id))
    }

    async fn deactivate_all(&self) -> Result<(), RepositoryError> {
        for row in self.table.rows.lock().unwrap().iter_mut() {
            row.is_active = false;
        }
        Ok(())
    }

    async fn activate(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.replace(
            |f| f.id == id,
            |f| CvFile {
                is_active: true,
                ..f.clone()
            },
        );
        Ok(())
    }
}

#[async_trait]
impl CvFileRepository for StubCvFiles {
    async fn list(&self) -> Result<Vec<CvFile>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot())
    }

    async fn get_active(&self) -> Result<Option<CvFile>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot().into_iter().find(|f| f.is_active))
    }

    async fn insert(&self, file: &NewCvFile) -> Result<CvFile, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.push(CvFile {
            id: Uuid::new_v4(),
            filename: file.filename.clone(),
            file_url: file.file_url.clone(),
            file_size: Some(file.file_size),
            mime_type: Some(file.mime_type.clone()),
            is_active: file.is_active,
            uploaded_at: Some(Utc::now()),
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.reachable()?;
        self.table.remove(|f| f.id != id);
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for StubCvFiles {
    async fn put(
        &self,
        bucket: &str,
        object: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, RepositoryError> {
        Ok(self.bucket.put(bucket, object))
    }
}

#[derive(Clone)]
pub struct StubProfileImages {
    table: Table<ProfileImage>,
    bucket: Bucket,
}

impl StubProfileImages {
    pub fn with(rows: Vec<ProfileImage>) -> Self {
        Self {
            table: Table::with(rows),
            bucket: Bucket::default(),
        }
    }

    pub fn rows(&self) -> Vec<ProfileImage> {
        self.table.snapshot()
    }

    pub fn stored_objects(&self) -> Vec<String> {
        self.bucket.names()
    }

    pub fn use_cases(&self) -> ProfileImageUseCases {
        let service = Arc::new(ProfileImageService::new(self.clone(), self.clone()));
        ProfileImageUseCases {
            list: service.clone(),
            get_active: service.clone(),
            upload: service.clone(),
            set_active: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl ActiveFlagStore for StubProfileImages {
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.table.snapshot().iter().any(|i| i.id == id))
    }

    async fn deactivate_all(&self) -> Result<(), RepositoryError> {
        for row in self.table.rows.lock().unwrap().iter_mut() {
            row.is_active = false;
        }
        Ok(())
    }

    async fn activate(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.replace(
            |i| i.id == id,
            |i| ProfileImage {
                is_active: true,
                ..i.clone()
            },
        );
        Ok(())
    }
}

#[async_trait]
impl ProfileImageRepository for StubProfileImages {
    async fn list(&self) -> Result<Vec<ProfileImage>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot())
    }

    async fn get_active(&self) -> Result<Option<ProfileImage>, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.snapshot().into_iter().find(|i| i.is_active))
    }

    async fn insert(&self, image: &NewProfileImage) -> Result<ProfileImage, RepositoryError> {
        self.table.reachable()?;
        Ok(self.table.push(ProfileImage {
            id: Uuid::new_v4(),
            filename: image.filename.clone(),
            image_url: image.image_url.clone(),
            alt_text: Some(image.alt_text.clone()),
            is_active: image.is_active,
            uploaded_at: Some(Utc::now()),
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.table.reachable()?;
        self.table.remove(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for StubProfileImages {
    async fn put(
        &self,
        bucket: &str,
        object: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, RepositoryError> {
        Ok(self.bucket.put(bucket, object))
    }
}
