pub mod profile_image_repository_supabase;

pub use profile_image_repository_supabase::{SupabaseProfileImageRepository, PROFILE_IMAGES_TABLE};
