pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub maker_id: i64,
        #[validate(length(min = 1, max = 120, code = "INVALID_MEAL_TITLE"))]
        pub title: String,
        #[validate(length(min = 1, max = 500, code = "INVALID_MEAL_DESCRIPTION"))]
        pub description: String,
        #[validate(range(
            exclusive_min = 0.0,
            code = "INVALID_MEAL_PRICE",
            message = "Price must be greater than zero"
        ))]
        pub price: f64,
        #[validate(length(min = 1, code = "INVALID_MEAL_IMAGE"))]
        pub image_data: String,
    }
}

pub mod response {
    use crate::{modules::meal::repository::Meal, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => (StatusCode::CREATED, Json(json!(meal))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateMeal,
        MakerNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::MakerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Maker not found" })),
                )
                    .into_response(),
                Self::FailedToCreateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
