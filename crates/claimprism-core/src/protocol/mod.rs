//! Mapper callback wire format.
//!
//! The federation host sends a versioned request envelope carrying the
//! verified token claims and expects a decision object back:
//! - Request: `{"version":"1.0","issuerId":"...","claims":{...}}`
//! - Decision: `{"allow":false}` or `{"allow":true,"claims":{...}}`
//!
//! Decoding never panics: malformed input is reported as `ClaimPrismError`.

pub mod decision;
pub mod request;

pub use decision::Decision;
pub use request::{MapperRequest, MAPPER_PROTOCOL_VERSION};

/// Claims as presented by the token: arbitrary JSON values keyed by name.
pub type Claims = serde_json::Map<String, serde_json::Value>;
