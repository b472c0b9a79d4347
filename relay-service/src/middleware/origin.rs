//! Explicit rejection of cross-origin callers other than the allowed front-end.
//!
//! The CORS layer only withholds permissive headers, which browsers enforce.
//! This guard refuses the request server-side as well. Requests that declare
//! no `Origin` (same-origin navigations, server-to-server calls) pass through.

use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

pub const ORIGIN_NOT_ALLOWED: &str = "Origen no permitido.";

#[derive(Debug, Clone)]
pub struct AllowedOrigin(pub HeaderValue);

pub async fn origin_guard(
    State(allowed): State<AllowedOrigin>,
    req: Request,
    next: Next,
) -> Response {
    match req.headers().get(ORIGIN) {
        Some(origin) if *origin != allowed.0 => {
            tracing::warn!(
                origin = ?origin,
                method = %req.method(),
                uri = %req.uri(),
                "Rejected request from disallowed origin"
            );
            AppError::Forbidden(anyhow::anyhow!(ORIGIN_NOT_ALLOWED)).into_response()
        }
        _ => next.run(req).await,
    }
}
