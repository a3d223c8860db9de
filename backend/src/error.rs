use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown connector: {0}")]
    UnknownAlias(String),
    #[error("No connector handles url: {0}")]
    NoMatch(String),
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
