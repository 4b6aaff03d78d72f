use screener_core::Dataset;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}
