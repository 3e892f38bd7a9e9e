pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub maker_id: i64,
        #[validate(length(min = 1, max = 120, code = "INVALID_MAKER_NAME"))]
        pub name: String,
        #[validate(email(code = "INVALID_MAKER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 1, max = 64, code = "INVALID_MAKER_PHONE"))]
        pub phone: String,
        #[validate(length(min = 1, max = 64, code = "INVALID_MAKER_COUNTRY"))]
        pub country: String,
        #[validate(length(min = 1, max = 500, code = "INVALID_MAKER_LOCATION"))]
        pub location: String,
    }
}

pub mod response {
    use crate::{modules::maker::repository::MakerProfile, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ProfileUpdated(MakerProfile),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileUpdated(profile) => {
                    (StatusCode::OK, Json(json!(profile))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToUpdateProfile,
        MakerNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToUpdateProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update maker profile" })),
                )
                    .into_response(),
                Self::MakerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Maker not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
