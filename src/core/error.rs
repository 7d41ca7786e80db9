use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Most upstream failures never surface here: provider and delegate errors
/// are absorbed at their stage boundary and converted into the documented
/// empty/default fallback. The variants that reach callers of the pipeline
/// operations are [`PulseError::UnknownSector`] and [`PulseError::NoData`].
#[derive(Debug, Error)]
pub enum PulseError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A cache file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from an upstream was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A call required a credential that was not configured on the client.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// The requested sector id is not in the recognized sector set.
    #[error("unknown sector id: {0}")]
    UnknownSector(String),

    /// Every sector fetch failed; no heatmap can be assembled.
    #[error("no sector data available")]
    NoData,
}
