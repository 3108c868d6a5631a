use thiserror::Error;

/// Errors raised while turning an inbound body into summary input
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("No records provided")]
    NoRecords,

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}
