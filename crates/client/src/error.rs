/// Errors returned by [`crate::PatientorClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A non-2xx response. `message` is the server's `error` field when present, otherwise
    /// the raw body.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response body at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
