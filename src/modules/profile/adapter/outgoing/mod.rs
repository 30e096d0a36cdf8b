pub mod personal_info_repository_supabase;

pub use personal_info_repository_supabase::{SupabasePersonalInfoRepository, PERSONAL_INFO_TABLE};
