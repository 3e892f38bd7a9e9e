pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub eater_id: i64,
        #[validate(length(min = 1, max = 120, code = "INVALID_DISPLAY_NAME"))]
        pub display_name: String,
        #[validate(length(max = 64, code = "INVALID_EATER_PHONE"))]
        pub phone: Option<String>,
        #[validate(length(max = 120, code = "INVALID_FAVORITE_CUISINE"))]
        pub favorite_cuisine: Option<String>,
        #[validate(length(max = 500, code = "INVALID_EATER_NOTE"))]
        pub note: Option<String>,
    }
}

pub mod response {
    use crate::{modules::eater::repository::EaterProfile, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ProfileUpdated(EaterProfile),
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
        EaterNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToUpdateProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update eater profile" })),
                )
                    .into_response(),
                Self::EaterNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Eater not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
