//! claimprism rule callback.
//!
//! - Config: YAML file named by `CLAIMPRISM_CONFIG` (default `claimprism.yaml`)
//! - Input: one mapper request JSON on stdin
//! - Output: one decision JSON line on stdout
//! - Logs and audit records go to stderr; audit records ignore `RUST_LOG`

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use claimprism_core::error::{ClaimPrismError, Result};
use claimprism_handler::{config, obs, HandlerState};

const CONFIG_ENV: &str = "CLAIMPRISM_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "claimprism.yaml";

fn main() -> ExitCode {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(obs::log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "claimprism failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;
    let state = HandlerState::new(cfg)?;

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| ClaimPrismError::Internal(format!("read stdin failed: {e}")))?;

    let decision = state.respond(&raw);
    let out = decision.to_json()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}")
        .and_then(|_| stdout.flush())
        .map_err(|e| ClaimPrismError::Internal(format!("write decision failed: {e}")))?;
    Ok(())
}
