//! Error types for partner API operations.

/// Render the itemized failure suffix for a failed request.
fn failures_suffix(failures: &[String]) -> String {
    if failures.is_empty() {
        String::new()
    } else {
        format!(" [FAILURES: {}]", failures.join(", "))
    }
}

/// Errors that can occur when configuring the client or interacting with
/// the partner API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid, ambiguous, or missing auth configuration. Fatal at
    /// construction, never retried.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The caller requested an HTTP method outside GET/PUT/POST/DELETE.
    /// Raised before any network I/O.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Network-level failure. The pipeline never retries; callers may.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failed to serialize a request body or decode a typed response.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response body was not valid JSON.
    #[error("error parsing response JSON ({status_code}): {detail}")]
    MalformedResponse {
        /// HTTP status code of the response.
        status_code: u16,
        /// Parse error text.
        detail: String,
    },

    /// Well-formed JSON response indicating a logical failure: a
    /// non-success status code or a `success: false` payload.
    #[error("Request Failed: {message}{}", failures_suffix(.failures))]
    RequestFailed {
        /// HTTP status code of the response.
        status_code: u16,
        /// Server-reported error message.
        message: String,
        /// Itemized failure messages from the `failures` list, if any.
        failures: Vec<String>,
    },

    /// Key material or signing error.
    #[error("crypto error: {0}")]
    Crypto(#[from] wns_primitives::CryptoError),

    /// An entity operation was attempted out of sequence, e.g. deleting
    /// a wallet name that was never saved remotely.
    #[error("{0}")]
    InvalidState(String),
}
