use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricError {
    #[error("source and hypothesis lists must have the same number of entries: {sources} != {hypotheses}")]
    InputLengthMismatch { sources: usize, hypotheses: usize },

    #[error("reference-free metric requires source segments")]
    MissingSources,

    #[error("scoring client error: {0}")]
    Client(#[from] ClientError),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Failure shapes surfaced by the external scoring client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("client configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, MetricError>;
