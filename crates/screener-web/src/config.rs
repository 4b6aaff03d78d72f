use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::WebError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATASET: &str = "StockDataset.csv";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://hidden-alpha-v0.vercel.app",
];

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub dataset: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            dataset: PathBuf::from(DEFAULT_DATASET),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| (*origin).to_owned())
                .collect(),
        }
    }
}

impl ServerConfig {
    /// CORS policy for the configured origins. Credentials are allowed, so
    /// origins must be listed explicitly.
    pub fn cors_layer(&self) -> Result<CorsLayer, WebError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| WebError::InvalidOrigin {
                    origin: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT])
            .allow_credentials(true))
    }
}
