use std::fmt;

/// Failures talking to the listings backend. The portal never surfaces the
/// distinction to end users; all three collapse into one "could not load"
/// message at the view layer.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS).
    Network(String),
    /// The backend answered with a non-success status.
    Status(u16),
    /// The body could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code) => write!(f, "Backend returned status {code}"),
            ApiError::Decode(msg) => write!(f, "Unexpected response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
