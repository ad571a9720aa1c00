//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// The library never looks at the HTTP status code. A call either yields a
/// body that decodes into the requested type, or fails with one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: connection refused, timeout, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body did not decode into the requested type.
    ///
    /// The message is the raw body text, so broker error text such as
    /// `unauthorized` reaches the caller verbatim.
    #[error("{body}")]
    Decode {
        /// Raw response body.
        body: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP transport could not be created.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }

    /// Check if the response body failed to decode.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Raw response body of a decode failure.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(body: &str) -> Error {
        let source = serde_json::from_str::<serde_json::Value>(body).unwrap_err();
        Error::Decode {
            body: body.to_string(),
            source,
        }
    }

    #[test]
    fn test_decode_error_displays_raw_body() {
        let err = decode_error("unauthorized");
        assert_eq!(err.to_string(), "unauthorized");
        assert_eq!(err.raw_body(), Some("unauthorized"));
        assert!(err.is_decode_error());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_decode_error_empty_body() {
        let err = decode_error("");
        assert_eq!(err.to_string(), "");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_other_errors_have_no_raw_body() {
        let err = Error::Config("no tls backend".to_string());
        assert_eq!(err.raw_body(), None);
        assert!(!err.is_decode_error());
        assert_eq!(err.to_string(), "Configuration error: no tls backend");
    }
}
