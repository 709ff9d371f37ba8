//! Error types for the echo service client.
//!
//! # Design
//! `HttpError` means the service was reached and refused; `TransportError`
//! means it could not be reached at all. `InvalidJson` is the only local
//! input error and gets its own variant so the command layer can report it
//! with a fixed message instead of the parser's diagnostics.

use std::fmt;

/// Errors returned by `SampleService` and `EchoClient`.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, I/O).
    TransportError(String),

    /// The response body was not a JSON object.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// User-supplied payload text is not valid JSON.
    InvalidJson(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpError { status, body } if body.is_empty() => {
                write!(f, "HTTP {status}")
            }
            ApiError::HttpError { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::TransportError(msg) => write!(f, "transport failed: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::InvalidJson(msg) => write!(f, "invalid JSON: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_omits_empty_body() {
        let err = ApiError::HttpError { status: 404, body: String::new() };
        assert_eq!(err.to_string(), "HTTP 404");
        let err = ApiError::HttpError { status: 502, body: "bad gateway".into() };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
    }
}
