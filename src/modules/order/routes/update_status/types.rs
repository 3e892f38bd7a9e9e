pub mod request {
    use crate::{modules::order::repository::OrderStatus, utils::validation};
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_status(status: &str) -> Result<(), ValidationError> {
        match validation::normalize(status).parse::<OrderStatus>() {
            Ok(_) => Ok(()),
            Err(_) => Err(ValidationError::new("INVALID_ORDER_STATUS").with_message(
                Cow::from("Status must be one of 'pending', 'preparing', 'ready' or 'completed'"),
            )),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_status"))]
        pub status: String,
    }

    impl Body {
        pub fn status(&self) -> Option<OrderStatus> {
            validation::normalize(&self.status).parse().ok()
        }
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        OrderStatusUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated(order) => {
                    (StatusCode::OK, Json(json!(order))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToUpdateOrderStatus,
        OrderNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToUpdateOrderStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
