pub mod activation;
pub mod api;
pub mod content;
pub mod object_storage;
pub mod subscription;
pub mod supabase;
