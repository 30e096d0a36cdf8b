use std::sync::Arc;

use crate::modules::profile_image::application::ports::incoming::{
    DeleteProfileImageUseCase, GetActiveProfileImageUseCase, ListProfileImagesUseCase,
    SetActiveProfileImageUseCase, UploadProfileImageUseCase,
};

#[derive(Clone)]
pub struct ProfileImageUseCases {
    pub list: Arc<dyn ListProfileImagesUseCase + Send + Sync>,
    pub get_active: Arc<dyn GetActiveProfileImageUseCase + Send + Sync>,
    pub upload: Arc<dyn UploadProfileImageUseCase + Send + Sync>,
    pub set_active: Arc<dyn SetActiveProfileImageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileImageUseCase + Send + Sync>,
}
