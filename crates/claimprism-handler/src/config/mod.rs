//! Handler config loader (strict parsing).

pub mod schema;

use std::fs;

use claimprism_core::error::{ClaimPrismError, Result};

pub use schema::{HandlerConfig, IssuerConfig, MapperConfig};

pub fn load_from_file(path: &str) -> Result<HandlerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ClaimPrismError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HandlerConfig> {
    let cfg: HandlerConfig = serde_yaml::from_str(s)
        .map_err(|e| ClaimPrismError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
