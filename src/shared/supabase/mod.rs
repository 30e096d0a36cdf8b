//! Client for the hosted backend: PostgREST tables and RPC, GoTrue auth,
//! object storage and a polling change feed standing in for realtime.

mod auth;
mod client;
mod config;
mod error;
mod realtime;
mod storage;
mod transport;

pub use auth::{AuthSession, AuthUser};
pub use client::{SupabaseClient, TableRequest};
pub use config::SupabaseConfig;
pub use error::SupabaseError;
pub use realtime::{diff_keys, ChangeEvent, KeyDiff, PollingChangeFeed};
pub use storage::timestamped_object_name;
pub use transport::{HttpMethod, HttpTransport, PreparedRequest, RawResponse, ReqwestTransport};

#[cfg(test)]
pub mod fake;
