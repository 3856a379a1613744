//! Registry module exports.
//!
//! Re-exports the issuer registry and the mapper service trait so downstream
//! consumers can depend on this module directly.

pub mod mapper_registry;

pub use mapper_registry::{MapperRegistry, MapperService};
