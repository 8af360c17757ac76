use thiserror::Error;

/// Failures talking to the remote chat service.
///
/// These never reach the user directly; the remote responder turns every
/// variant into the connection apology and an offline status.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request to chat service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed chat reply: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create preference directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write preference '{key}': {source}")]
    Write { key: String, source: std::io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("reply delay minimum ({min_ms} ms) exceeds maximum ({max_ms} ms)")]
    DelayRange { min_ms: u64, max_ms: u64 },
}
