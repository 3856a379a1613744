//! claimprism handler library entry.
//!
//! This crate wires the config loader, issuer registry, built-in mapper
//! services, and audit logging into the rule callback host. It is consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod registry;
pub mod services;

pub use app_state::HandlerState;
