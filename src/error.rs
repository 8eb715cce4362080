//! Error types for PokéAPI calls.
//!
//! Every failure a client method can produce is one variant of [`Error`].
//! Callers are expected to branch on the variant, never on message text.

use http::StatusCode;

/// The main error type for PokéAPI calls.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_client::{BerryClient, ClientArgs, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = BerryClient::new(ClientArgs::default())?;
///
/// match client.get_berry_by_name("cheri").await {
///     Ok(berry) => println!("cheri has id {}", berry.id),
///     Err(Error::NotFound { url }) => eprintln!("nothing at {}", url),
///     Err(Error::Decode { serde_error, .. }) => eprintln!("unexpected shape: {}", serde_error),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed caller input, detected before any I/O.
    ///
    /// Raised for non-positive ids, empty or non-slug names and a zero page size.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The upstream service answered 404: the named or identified resource does not exist.
    #[error("Resource not found: {url}")]
    NotFound {
        /// The URL that was requested
        url: String,
    },

    /// The upstream service answered with any other non-2xx status code.
    #[error("HTTP error {status}: {raw_response}")]
    HttpStatus {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
    },

    /// A network-level failure (connection refused, DNS, TLS, timeout, truncated body).
    ///
    /// Use [`Error::is_timeout`] to tell an expired timeout apart from other failures.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body does not match the expected entity shape.
    #[error("Failed to decode response: {serde_error}")]
    Decode {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid base URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    ///
    /// ```
    /// use pokeapi_client::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::NotFound { url: "https://pokeapi.co/api/v2/berry/nope".to_string() };
    /// assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    ///
    /// let err = Error::InvalidArgument("id must be positive".to_string());
    /// assert_eq!(err.status(), None);
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { raw_response, .. } => Some(raw_response),
            Error::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns `true` if the request failed because the configured timeout expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the failure happened before or while talking to the network,
    /// rather than in the server's answer.
    pub(crate) fn is_request_side(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::InvalidArgument(_))
    }
}

/// A specialized `Result` type for PokéAPI calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_accessors() {
        let err = Error::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            raw_response: "boom".to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.raw_response(), Some("boom"));
        assert!(!err.is_not_found());
        assert!(!err.is_timeout());
        assert!(!err.is_request_side());
    }

    #[test]
    fn test_decode_keeps_raw_body() {
        let err = Error::Decode {
            raw_response: "{}".to_string(),
            serde_error: "missing field `id`".to_string(),
        };

        assert_eq!(err.raw_response(), Some("{}"));
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_invalid_argument_is_request_side() {
        let err = Error::InvalidArgument("id must be positive, got -1".to_string());
        assert!(err.is_request_side());
        assert_eq!(err.raw_response(), None);
    }
}
