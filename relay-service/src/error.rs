//! Errors surfaced by the chat endpoint.

use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use service_core::error::ErrorResponse;
use thiserror::Error;

pub const MISSING_MESSAGE: &str = "Falta el mensaje en la solicitud.";

pub const INVALID_BODY: &str =
    "El cuerpo de la solicitud debe ser JSON con un campo \"message\" de tipo texto.";

pub const UPSTREAM_FAILURE: &str =
    "Error del servidor al procesar la solicitud. Por favor, revisa los logs del backend.";

#[derive(Debug, Error)]
pub enum ChatError {
    /// The caller must fix the request. The message is shown to the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// The generation backend failed. Only a generic message leaves the service.
    #[error("Upstream error: {0}")]
    Upstream(#[from] ProviderError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ChatError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            ChatError::Upstream(err) => {
                tracing::error!(
                    error = %err,
                    kind = err.kind(),
                    "Error communicating with the generation backend"
                );
                counter!("chat_upstream_failures_total", "kind" => err.kind()).increment(1);
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}
