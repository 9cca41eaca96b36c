//! osu! API error types.

/// Failure conditions when talking to the osu! web API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OsuApiErrorKind {
    /// Network or TLS failure before a response arrived
    #[display("HTTP request failed: {_0}")]
    Http(String),
    /// The API answered with a non-success status
    #[display("API error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
    /// OAuth token exchange failed
    #[display("Token exchange failed: {_0}")]
    Token(String),
    /// The response body did not match the expected shape
    #[display("Response parsing failed: {_0}")]
    Parse(String),
}

impl OsuApiErrorKind {
    /// True when the API reported that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OsuApiErrorKind::Status { status: 404, .. })
    }
}

/// osu! API error with source location tracking.
///
/// # Examples
///
/// ```
/// use osulink_error::{OsuApiError, OsuApiErrorKind};
///
/// let err = OsuApiError::new(OsuApiErrorKind::Status {
///     status: 404,
///     message: "Specified user couldn't be found.".to_string(),
/// });
/// assert!(err.kind().is_not_found());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("osu! API Error: {} at line {} in {}", kind, line, file)]
pub struct OsuApiError {
    kind: OsuApiErrorKind,
    line: u32,
    file: &'static str,
}

impl OsuApiError {
    /// Create a new osu! API error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OsuApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OsuApiErrorKind {
        &self.kind
    }
}

/// Result type for osu! API calls.
pub type OsuApiResult<T> = Result<T, OsuApiError>;
