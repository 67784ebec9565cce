use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to whoever calls into the service layer.
///
/// Mutating a post that does not exist is not an error, those
/// requests are simply ignored.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User performed request with invalid body")]
    InvalidFormBody(validator::ValidationErrors),
}

impl Error {
    /// HTTP status code a backend would answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::InvalidFormBody(..) => 400,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::InvalidFormBody(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::Token;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_serde_impl() {
        serde_test::assert_ser_tokens(
            &Error::InvalidCredentials,
            &[
                Token::Struct {
                    name: "Error",
                    len: 1,
                },
                Token::Str("type"),
                Token::Str("invalid_credentials"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_invalid_form_body_keeps_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("description", ValidationError::new("blank"));

        let value = serde_json::to_value(Error::from(errors)).unwrap();
        assert_eq!(value["type"], "invalid_form_body");
        assert_eq!(value["description"][0]["code"], "blank");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::InvalidCredentials.status_code(), 401);
        assert_eq!(
            Error::InvalidFormBody(ValidationErrors::new()).status_code(),
            400
        );
    }
}
