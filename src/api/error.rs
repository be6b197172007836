use thiserror::Error;

/// Errors produced while talking to the layer API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, reset, or a truncated body.
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot carry path segments.
    #[error("Base URL '{0}' cannot be used as an API root")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }
}
