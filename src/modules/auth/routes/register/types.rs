pub mod request {
    use crate::{modules::user::repository::Role, utils::validation};
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_role(role: &str) -> Result<(), ValidationError> {
        match validation::normalize(role).parse::<Role>() {
            Ok(_) => Ok(()),
            Err(_) => Err(ValidationError::new("INVALID_USER_ROLE")
                .with_message(Cow::from("Role must be either 'eater' or 'maker'"))),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            max = 128,
            code = "INVALID_PASSWORD_LENGTH",
            message = "Password must be between 8 and 128 characters"
        ))]
        pub password: String,
        #[validate(custom(function = "validate_role"))]
        pub role: Option<String>,
    }

    impl Payload {
        pub fn role(&self) -> Role {
            self.role
                .as_deref()
                .and_then(|role| validation::normalize(role).parse::<Role>().ok())
                .unwrap_or_default()
        }
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Registered(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered(user) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": user.id,
                        "email": user.email,
                        "role": user.role,
                        "message": "Registration successful",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already registered" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::{request::Payload, response::Error};
    use crate::modules::user::repository::Role;
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::Validate;

    fn payload(email: &str, password: &str, role: Option<&str>) -> Payload {
        Payload {
            email: email.to_string(),
            password: password.to_string(),
            role: role.map(String::from),
        }
    }

    #[test]
    fn role_defaults_to_eater() {
        let payload = payload("a@x.com", "password1", None);

        assert!(payload.validate().is_ok());
        assert_eq!(payload.role(), Role::Eater);
    }

    #[test]
    fn role_is_trimmed_and_case_insensitive() {
        let payload = payload("b@x.com", "password1", Some(" Maker "));

        assert!(payload.validate().is_ok());
        assert_eq!(payload.role(), Role::Maker);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let errors = payload("b@x.com", "password1", Some("admin"))
            .validate()
            .unwrap_err();

        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn password_length_is_bounded() {
        assert!(payload("a@x.com", "short", None).validate().is_err());
        assert!(payload("a@x.com", &"p".repeat(129), None)
            .validate()
            .is_err());
        assert!(payload("a@x.com", &"p".repeat(128), None)
            .validate()
            .is_ok());
    }

    #[test]
    fn email_must_be_valid() {
        let errors = payload("not-an-email", "password1", None)
            .validate()
            .unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let response = Error::EmailAlreadyInUse.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
