pub mod request {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub maker_id: i64,
        #[validate(length(min = 1, max = 32, code = "INVALID_ORDER_CODE"))]
        pub order_code: String,
        #[validate(length(min = 1, max = 120, code = "INVALID_EATER_NAME"))]
        pub eater_name: String,
        pub eater_id: Option<i64>,
        #[validate(length(min = 1, max = 120, code = "INVALID_MEAL_NAME"))]
        pub meal_name: String,
        #[validate(length(min = 1, code = "INVALID_ORDER_IMAGE"))]
        pub image_data: String,
        #[validate(range(
            exclusive_min = 0.0,
            code = "INVALID_ORDER_PRICE",
            message = "Price must be greater than zero"
        ))]
        pub price: f64,
        pub order_time: Option<DateTime<Utc>>,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!(order))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateOrder,
        MakerNotFound,
        EaterNotFound,
        OrderCodeAlreadyExists,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create order" })),
                )
                    .into_response(),
                Self::MakerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Maker not found" })),
                )
                    .into_response(),
                Self::EaterNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Eater not found" })),
                )
                    .into_response(),
                Self::OrderCodeAlreadyExists => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Order code already exists" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
