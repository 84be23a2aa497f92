use astra::Response;
use std::fmt;

use crate::api::ApiError;

/// Errors originating from either the server logic
/// (routing, bad form input, etc.) or the listings backend.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Backend(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Backend(msg) => write!(f, "Backend Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        ServerError::Backend(err.to_string())
    }
}
