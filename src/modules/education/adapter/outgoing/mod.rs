pub mod education_repository_supabase;

pub use education_repository_supabase::{SupabaseEducationRepository, EDUCATION_TABLE};
