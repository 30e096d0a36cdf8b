// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope documented for every successful response.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope documented for every failed response. Collaborator failures keep
/// the collaborator's message verbatim.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of VALIDATION_ERROR, CONFIRMATION_REQUIRED, NOT_FOUND,
    /// UNAUTHORIZED, BACKEND_ERROR, INTERNAL_ERROR or a field-specific code.
    #[schema(example = "CONFIRMATION_REQUIRED")]
    pub code: String,

    #[schema(example = "Pass ?confirm=true to delete this record")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_serialises_like_api_response() {
        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: "Skill not found".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
