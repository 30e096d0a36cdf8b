pub mod use_cases;

pub use use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, ListEducationUseCase, UpdateEducationUseCase,
};
