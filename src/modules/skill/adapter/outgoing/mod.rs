pub mod skill_repository_supabase;

pub use skill_repository_supabase::{SupabaseSkillRepository, SKILLS_TABLE};
