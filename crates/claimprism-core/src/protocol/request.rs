//! Request envelope sent by the federation host.

use serde::{Deserialize, Serialize};

use crate::error::{ClaimPrismError, Result};

use super::Claims;

/// Only protocol version the mapper understands.
pub const MAPPER_PROTOCOL_VERSION: &str = "1.0";

/// Mapper request envelope.
///
/// Unknown envelope fields are ignored; the host owns this format and may
/// grow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperRequest {
    /// Protocol version, defaults to the current one when omitted.
    #[serde(default = "default_version")]
    pub version: String,
    /// Host-side name of the issuer that produced the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// Verified token claims. Missing decodes as an empty map.
    #[serde(default)]
    pub claims: Claims,
}

fn default_version() -> String {
    MAPPER_PROTOCOL_VERSION.into()
}

impl MapperRequest {
    /// Current-version request for `claims`.
    pub fn new(issuer_id: Option<String>, claims: Claims) -> Self {
        Self {
            version: default_version(),
            issuer_id,
            claims,
        }
    }

    /// Decode a request from raw JSON.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| ClaimPrismError::BadRequest(format!("invalid mapper request: {e}")))
    }

    pub fn check_version(&self) -> Result<()> {
        if self.version != MAPPER_PROTOCOL_VERSION {
            return Err(ClaimPrismError::UnsupportedVersion(self.version.clone()));
        }
        Ok(())
    }
}
