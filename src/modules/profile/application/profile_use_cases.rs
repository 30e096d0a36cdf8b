use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPersonalInfoUseCase, UpsertPersonalInfoUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertPersonalInfoUseCase + Send + Sync>,
}
