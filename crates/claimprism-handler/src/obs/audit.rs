//! Audit records.
//!
//! Each decision is logged once on the `claimprism::audit` target with the
//! entry rendered as a single JSON object, so log pipelines can pick the
//! records out without parsing the formatter's layout.

use serde::Serialize;
use serde_json::Value;

use claimprism_core::{Claims, Decision, SessionTags};

pub const AUDIT_TARGET: &str = "claimprism::audit";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub issuer_id: Option<String>,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub tag_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

fn claim_str(claims: &Claims, key: &str) -> Option<String> {
    claims.get(key).and_then(Value::as_str).map(str::to_string)
}

impl AuditEntry {
    /// Entry for a completed mapping; `source` is the claims as received.
    pub fn decided(issuer_id: Option<&str>, source: &Claims, decision: &Decision) -> Self {
        let tag_count = decision
            .claims()
            .and_then(SessionTags::from_claims)
            .map(|t| t.len())
            .unwrap_or(0);

        Self {
            issuer_id: issuer_id.map(str::to_string),
            allowed: decision.is_allowed(),
            subject: claim_str(source, "sub"),
            repository: claim_str(source, "repository"),
            tag_count,
            error_code: None,
        }
    }

    /// Entry for a request rejected before any mapper ran.
    pub fn rejected(issuer_id: Option<&str>, code: &'static str) -> Self {
        Self {
            issuer_id: issuer_id.map(str::to_string),
            allowed: false,
            subject: None,
            repository: None,
            tag_count: 0,
            error_code: Some(code),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"auditEncodeError\":\"{e}\"}}"))
    }

    pub fn emit(&self) {
        tracing::info!(
            target: AUDIT_TARGET,
            issuer = self.issuer_id.as_deref().unwrap_or("-"),
            allowed = self.allowed,
            entry = %self.to_json(),
            "mapping decision"
        );
    }
}
