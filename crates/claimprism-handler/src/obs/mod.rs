//! Observability: log filter setup and one structured audit record per
//! mapping decision.

pub mod audit;

use tracing_subscriber::EnvFilter;

pub use audit::{AuditEntry, AUDIT_TARGET};

/// Level used when `RUST_LOG` is unset or blank.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the log filter from `RUST_LOG`.
///
/// Audit records are always enabled at `info`, whatever the rest of the
/// filter says.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    let base = rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::new(format!("{base},{AUDIT_TARGET}=info"))
}
