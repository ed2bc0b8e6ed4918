use thiserror::Error;

/// Errors produced while collecting MegaRAID metrics.
///
/// Variants fall into two tiers. Most are fatal and abort the run before
/// any output is written. [`ExporterError::DriveDetail`] is the
/// exception: it is raised per physical drive, and callers log it and
/// skip that drive's detailed metrics instead of aborting.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("storcli error: {0}")]
    Storcli(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("drive detail error: {0}")]
    DriveDetail(String),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
