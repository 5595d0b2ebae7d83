use std::fmt;
use thiserror::Error;

/// The error type for awsauth operations.
///
/// Every error carries an [`ErrorKind`] to branch on, a human readable
/// message and, optionally, the lower level error that caused it.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// Why signing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The credential can't be used for signing, e.g. an empty secret key.
    CredentialInvalid,
    /// The request can't be signed: no host, a malformed `x-amz-date`,
    /// header values that are not visible ASCII.
    RequestInvalid,
    /// The signer is misconfigured: missing region or service.
    ConfigInvalid,
    /// The request body failed while being buffered for hashing.
    BodyUnreadable,
    /// Anything else.
    Unexpected,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::CredentialInvalid => "invalid credentials",
            ErrorKind::RequestInvalid => "invalid request",
            ErrorKind::ConfigInvalid => "invalid configuration",
            ErrorKind::BodyUnreadable => "unreadable body",
            ErrorKind::Unexpected => "unexpected error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the error that caused this one.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error was caused by the caller's input rather than by
    /// the signing process itself.
    ///
    /// Retrying such a request without changing it fails the same way.
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialInvalid | ErrorKind::RequestInvalid | ErrorKind::ConfigInvalid
        )
    }

    /// Create a [`ErrorKind::CredentialInvalid`] error.
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a [`ErrorKind::RequestInvalid`] error.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a [`ErrorKind::ConfigInvalid`] error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a [`ErrorKind::BodyUnreadable`] error.
    pub fn body_unreadable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyUnreadable, message)
    }

    /// Create a [`ErrorKind::Unexpected`] error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::unexpected("failed to format signing string").with_source(err)
    }
}

/// Errors from the `http` crate all come from request data we were handed.
macro_rules! impl_from_http_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Self {
                    Self::request_invalid(err.to_string()).with_source(err)
                }
            }
        )+
    };
}

impl_from_http_error!(
    http::Error,
    http::header::InvalidHeaderValue,
    http::header::ToStrError,
    http::uri::InvalidUri,
    http::uri::InvalidUriParts,
);
