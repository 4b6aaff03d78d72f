//! Route table.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/stocks` | [`stocks::list`] |
//! | `POST` | `/filter` | [`stocks::filter`] |
//! | `GET` | `/health` | [`health::health`] |

pub mod health;
pub mod stocks;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Application router with request tracing and the given CORS policy.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/stocks", get(stocks::list))
        .route("/filter", post(stocks::filter))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
