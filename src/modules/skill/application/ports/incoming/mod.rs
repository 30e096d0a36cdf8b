pub mod use_cases;

pub use use_cases::{CreateSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase, UpdateSkillUseCase};
