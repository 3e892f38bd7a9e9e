pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub order_id: i64,
        #[validate(range(
            min = 1,
            max = 5,
            code = "INVALID_REVIEW_RATING",
            message = "Rating must be between 1 and 5"
        ))]
        pub rating: i32,
        #[validate(length(min = 1, code = "INVALID_REVIEW_COMMENT"))]
        pub comment: String,
    }
}

pub mod response {
    use crate::{modules::review::repository::Review, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ReviewCreated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewCreated(review) => {
                    (StatusCode::CREATED, Json(json!(review))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateReview,
        OrderNotFound,
        OrderWithoutEater,
        ReviewAlreadySubmitted,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create review" })),
                )
                    .into_response(),
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::OrderWithoutEater => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Order is not associated with an eater" })),
                )
                    .into_response(),
                Self::ReviewAlreadySubmitted => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Review already submitted for this order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
