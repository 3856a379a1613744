//! Top-level facade crate for claimprism.
//!
//! Re-exports the core mapper types and the handler library so users can depend on a single crate.

pub mod core {
    pub use claimprism_core::*;
}

pub mod handler {
    pub use claimprism_handler::*;
}
