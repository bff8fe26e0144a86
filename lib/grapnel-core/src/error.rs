//! Error types for grapnel.

use derive_more::{Display, Error, From};

/// Main error type for grapnel operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// The in-flight request was cancelled through a [`crate::Canceller`].
    #[display("request cancelled")]
    Cancelled,

    /// A path variable in the URL template has no value in the data record.
    #[display("missing path variable `{_0}`")]
    #[from(skip)]
    MissingPathVariable(#[error(not(source))] String),

    /// A binary value appeared where only text can be encoded
    /// (path variable, query string, or URL-encoded body).
    #[display("binary value `{_0}` cannot be encoded as text")]
    #[from(skip)]
    BinaryValue(#[error(not(source))] String),

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    Json(serde_json::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a missing path variable error.
    #[must_use]
    pub fn missing_path_variable(name: impl Into<String>) -> Self {
        Self::MissingPathVariable(name.into())
    }

    /// Create a binary value error for the given key.
    #[must_use]
    pub fn binary_value(key: impl Into<String>) -> Self {
        Self::BinaryValue(key.into())
    }

    /// Returns `true` if this is a cancellation error.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this error was raised before any network call
    /// was issued (encoding and template resolution failures).
    #[must_use]
    pub const fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPathVariable(_)
                | Self::BinaryValue(_)
                | Self::Json(_)
                | Self::InvalidUrl(_)
                | Self::InvalidRequest(_)
        )
    }
}
