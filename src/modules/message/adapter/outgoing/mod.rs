pub mod contact_message_repository_supabase;
pub mod messages_config;

pub use contact_message_repository_supabase::{
    SupabaseContactMessageRepository, CONTACT_MESSAGES_TABLE,
};
pub use messages_config::MessagesConfig;
