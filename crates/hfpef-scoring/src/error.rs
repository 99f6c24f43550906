use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid input payload: {0}")]
    Payload(#[from] serde_json::Error),
}
