//! # Screener Web
//!
//! HTTP surface for the screener dataset.
//!
//! - `GET /stocks` returns every stock.
//! - `POST /filter` with `{"query": "P/E Ratio < 20 AND ROE > 0.15"}` returns
//!   the stocks matching the query. The body is read as JSON whatever its
//!   `Content-Type`; a missing or `null` query is the empty query and returns
//!   every stock. Malformed JSON or a non-string query gets
//!   `400 {"error": "Invalid request"}`.
//! - `GET /health` reports liveness and the dataset size.
//!
//! Responses are JSON arrays keyed by display field names, unless the
//! `Accept` header contains `text/html`, in which case an HTML table page is
//! returned instead.

pub mod config;
pub mod error;
pub mod html;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, WebError};
pub use routes::stocks::FilterRequest;
pub use server::{app, app_with_dataset, serve};
pub use state::AppState;
