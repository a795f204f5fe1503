//! Backend Errors
//!
//! Transport and HTTP failures. Views treat every variant as one
//! "request failed" condition; the variants exist for the logs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{url} answered HTTP {status}")]
    Status { status: u16, url: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 500,
            url: "/api/alerts/7/resolve".to_string(),
        };
        assert_eq!(err.to_string(), "/api/alerts/7/resolve answered HTTP 500");
    }
}
