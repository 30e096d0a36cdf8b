pub mod use_cases;

pub use use_cases::{
    DeleteCvUseCase, GetActiveCvUseCase, ListCvFilesUseCase, SetActiveCvUseCase, UploadCvUseCase,
};
