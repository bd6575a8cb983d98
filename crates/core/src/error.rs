use thiserror::Error;

pub type TargetingResult<T> = Result<T, TargetingError>;

#[derive(Error, Debug)]
pub enum TargetingError {
    /// A required delivery request field was empty or absent. Detected
    /// before any store access; maps to a client fault at the API boundary.
    #[error("invalid delivery request: missing {0} parameter")]
    InvalidRequest(&'static str),

    #[error("store error: {0}")]
    Store(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
