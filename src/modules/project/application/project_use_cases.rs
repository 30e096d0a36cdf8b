use std::sync::Arc;

use crate::modules::project::application::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
