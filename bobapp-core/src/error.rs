//! Errors raised while loading or selecting jokes

/// Error types for joke providers
#[derive(Debug, thiserror::Error)]
pub enum JokeError {
    #[error("no jokes available")]
    Empty,

    #[error("failed to read jokes: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse jokes: {0}")]
    Parse(#[from] serde_json::Error),
}
