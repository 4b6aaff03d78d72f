use screener_core::DatasetError;
use screener_web::WebError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Server(WebError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A dataset that fails to load under `serve` exits like any other dataset failure.
impl From<WebError> for CliError {
    fn from(error: WebError) -> Self {
        match error {
            WebError::Dataset(error) => Self::Dataset(error),
            other => Self::Server(other),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Dataset(_) => 3,
            Self::Serialization(_) => 4,
            Self::Server(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
