pub mod credential_check_static;
pub mod jwt;
pub mod session_store_memory;
pub mod session_store_redis;
pub mod supabase_auth_provider;
