use serde::Deserialize;

use super::transport::RawResponse;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SupabaseError {
    /// The backend answered with an error body. `message` is what it said.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Union of the error shapes PostgREST, GoTrue and storage return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<serde_json::Value>,
    message: Option<String>,
    msg: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    details: Option<String>,
}

impl SupabaseError {
    /// PostgREST code for "JSON object requested, multiple (or no) rows returned".
    pub const NO_ROWS_CODE: &'static str = "PGRST116";

    pub fn is_no_rows(&self) -> bool {
        matches!(self, SupabaseError::Api { code: Some(c), .. } if c == Self::NO_ROWS_CODE)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SupabaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn from_response(response: &RawResponse) -> Self {
        let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();

        let code = body.code.map(|c| match c {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });

        let message = body
            .message
            .or(body.msg)
            .or(body.error_description)
            .or(body.error)
            .or(body.details)
            .unwrap_or_else(|| {
                let text = String::from_utf8_lossy(&response.body).trim().to_string();
                if text.is_empty() {
                    format!("Request failed with status {}", response.status)
                } else {
                    text
                }
            });

        SupabaseError::Api {
            status: response.status,
            code,
            message,
        }
    }
}
