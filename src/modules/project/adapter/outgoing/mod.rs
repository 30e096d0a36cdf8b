pub mod project_repository_supabase;

pub use project_repository_supabase::{SupabaseProjectRepository, PROJECTS_TABLE};
