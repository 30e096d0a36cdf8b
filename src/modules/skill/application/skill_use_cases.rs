use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::{
    CreateSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase, UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
