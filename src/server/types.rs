use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body written for a missing or empty input field. The code-review route
/// reuses it unchanged so existing clients keep matching on it.
pub const PROMPT_REQUIRED: &str = "Prompt is required";

#[derive(Debug, Default, Deserialize)]
pub struct PromptQuery {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Processing error: {0}")]
    Delegate(#[from] crate::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Delegate(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Returns the input only when it is present and non-empty.
pub fn require_input(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation(PROMPT_REQUIRED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_require_input_accepts_non_empty() {
        assert_eq!(require_input(Some("hi".to_string())).unwrap(), "hi");
        assert_eq!(require_input(Some(" ".to_string())).unwrap(), " ");
    }

    #[test]
    fn test_require_input_rejects_missing_and_empty() {
        assert!(matches!(
            require_input(None),
            Err(ApiError::Validation(PROMPT_REQUIRED))
        ));
        assert!(matches!(
            require_input(Some(String::new())),
            Err(ApiError::Validation(PROMPT_REQUIRED))
        ));
    }

    #[tokio::test]
    async fn test_validation_error_is_plain_text_400() {
        let response = ApiError::Validation(PROMPT_REQUIRED).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Prompt is required");
    }

    #[tokio::test]
    async fn test_delegate_error_is_json_500() {
        let response = ApiError::from(crate::Error::llm("quota exceeded")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["error"],
            "Processing error: LLM error: quota exceeded"
        );
    }
}
