use std::sync::Arc;

use crate::modules::cv::application::ports::incoming::{
    DeleteCvUseCase, GetActiveCvUseCase, ListCvFilesUseCase, SetActiveCvUseCase, UploadCvUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub list: Arc<dyn ListCvFilesUseCase + Send + Sync>,
    pub get_active: Arc<dyn GetActiveCvUseCase + Send + Sync>,
    pub upload: Arc<dyn UploadCvUseCase + Send + Sync>,
    pub set_active: Arc<dyn SetActiveCvUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCvUseCase + Send + Sync>,
}
