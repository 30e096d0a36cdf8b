pub mod use_cases;

pub use use_cases::{
    DeleteProfileImageUseCase, GetActiveProfileImageUseCase, ListProfileImagesUseCase,
    SetActiveProfileImageUseCase, UploadProfileImageUseCase,
};
