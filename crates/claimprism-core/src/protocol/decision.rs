//! Decision returned to the federation host.

use serde::{Deserialize, Serialize};

use crate::error::{ClaimPrismError, Result};

use super::Claims;

/// Allow/deny outcome of a mapping.
///
/// A deny carries no claims and serializes as exactly `{"allow":false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub allow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Claims>,
}

impl Decision {
    pub fn allow(claims: Claims) -> Self {
        Self {
            allow: true,
            claims: Some(claims),
        }
    }

    pub fn deny() -> Self {
        Self {
            allow: false,
            claims: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allow
    }

    /// Claims to issue, present only on allow.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ClaimPrismError::Internal(format!("encode decision failed: {e}")))
    }
}
