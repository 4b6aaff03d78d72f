use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures while starting or running the HTTP service.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Dataset(#[from] screener_core::DatasetError),

    #[error("allowed origin '{origin}' is not a valid header value")]
    InvalidOrigin { origin: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Request-level errors returned to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    InvalidRequest,
    Render,
}

impl From<std::fmt::Error> for ApiError {
    fn from(_: std::fmt::Error) -> Self {
        Self::Render
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request" })),
            )
                .into_response(),
            Self::Render => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal error" })),
            )
                .into_response(),
        }
    }
}
