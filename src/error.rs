use thiserror::Error;

/// Crate-level error type. Per-row input problems never surface here; they
/// are counted and reported through `RunSummary` instead.
#[derive(Debug, Error)]
pub enum FxtrendError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv input is missing required column '{0}'")]
    MissingColumn(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("dropped {dropped} of {rows_read} input rows, above the allowed ratio {max_ratio}")]
    DropRateExceeded {
        dropped: usize,
        rows_read: usize,
        max_ratio: f64,
    },

    #[error("currency worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
