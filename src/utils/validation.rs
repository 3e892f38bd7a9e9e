use axum::{http::StatusCode, Json};
use serde_json::json;
use validator::ValidationErrors;

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// Trims and lowercases a raw enum-like string coming from a request body.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn validation_errors_are_bad_requests() {
        let mut errors = ValidationErrors::new();
        errors.add("price", ValidationError::new("range"));

        let (status, Json(body)) = into_response(errors);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["price"].is_array());
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Maker "), "maker");
        assert_eq!(normalize("READY"), "ready");
    }
}
