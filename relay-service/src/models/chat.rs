use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /chat`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Successful reply to `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn non_empty_message_is_valid() {
        assert!(parse(r#"{"message":"hola"}"#).validate().is_ok());
    }

    #[test]
    fn whitespace_message_is_passed_through() {
        assert!(parse(r#"{"message":"  "}"#).validate().is_ok());
    }

    #[test]
    fn missing_or_empty_message_is_invalid() {
        assert!(parse("{}").validate().is_err());
        assert!(parse(r#"{"message":null}"#).validate().is_err());
        assert!(parse(r#"{"message":""}"#).validate().is_err());
    }

    #[test]
    fn non_string_message_does_not_parse() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message":42}"#).is_err());
    }
}
