use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use screener_core::{query, Stock};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::html;
use crate::AppState;

/// Body of `POST /filter`. A missing or `null` query is the empty query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FilterRequest {
    /// Decode a request body regardless of its `Content-Type`. A JSON `null`
    /// body is the empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(|error| {
                debug!(%error, "rejecting filter request body");
                ApiError::InvalidRequest
            })
    }
}

/// `GET /stocks`
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let stocks: Vec<&Stock> = state.dataset.stocks().iter().collect();
    respond(&headers, &stocks, None)
}

/// `POST /filter`
pub async fn filter(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request = match FilterRequest::from_body(&body) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let parsed = query::parse_report(&request.query);
    let matched = state.dataset.filter(&parsed.query);
    info!(
        query = %request.query,
        conditions = parsed.query.len(),
        dropped = parsed.dropped.len(),
        matched = matched.len(),
        "filtered stocks"
    );

    respond(&headers, &matched, Some(&request.query))
}

fn respond(headers: &HeaderMap, stocks: &[&Stock], query: Option<&str>) -> Response {
    if !html::wants_html(headers) {
        return Json(stocks).into_response();
    }
    match html::render_stocks(stocks, query) {
        Ok(page) => Html(page).into_response(),
        Err(error) => ApiError::from(error).into_response(),
    }
}
