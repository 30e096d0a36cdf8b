pub mod use_cases;

pub use use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, UpdateProjectUseCase,
};
