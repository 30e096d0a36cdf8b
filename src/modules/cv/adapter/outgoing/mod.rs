pub mod cv_file_repository_supabase;

pub use cv_file_repository_supabase::{SupabaseCvFileRepository, CV_FILES_TABLE};
