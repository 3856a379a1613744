//! Shared error type across claimprism crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Unsupported mapper protocol version.
    UnsupportedVersion,
    /// No mapper registered for the issuer.
    UnknownIssuer,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::UnknownIssuer => "UNKNOWN_ISSUER",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ClaimPrismError>;

/// Unified error type used by core and handler.
#[derive(Debug, Error)]
pub enum ClaimPrismError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported mapper protocol version: {0}")]
    UnsupportedVersion(String),
    #[error("unrecognised issuer: {0}")]
    UnknownIssuer(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ClaimPrismError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ClaimPrismError::BadRequest(_) => ClientCode::BadRequest,
            ClaimPrismError::UnsupportedVersion(_) => ClientCode::UnsupportedVersion,
            ClaimPrismError::UnknownIssuer(_) => ClientCode::UnknownIssuer,
            ClaimPrismError::Internal(_) => ClientCode::Internal,
        }
    }
}
