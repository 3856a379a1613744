//! claimprism core: claims mapping primitives, wire envelope, and error types.
//!
//! This crate turns a set of verified OIDC claims into an allow/deny
//! decision and, on allow, attaches AWS session tags derived from the
//! claims. It performs no I/O and needs no async runtime, so the host
//! binary, tests, and other callers can embed it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `ClaimPrismError` or as a deny decision.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod mapper;
pub mod protocol;
pub mod tags;

/// Shared result type.
pub use error::{ClaimPrismError, Result};
pub use mapper::{map_claims, ClaimsMapper, MissingClaim};
pub use protocol::{Claims, Decision, MapperRequest};
pub use tags::{SessionTags, AWS_TAGS_CLAIM};
