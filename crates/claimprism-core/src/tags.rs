//! AWS session tag structure attached to mapped claims.
//!
//! AWS STS reads principal tags from a single namespaced claim whose value is
//! an object of the form:
//!
//! ```json
//! { "principal_tags": { "actor": ["alice"] }, "transitive_tag_keys": [] }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClaimPrismError, Result};
use crate::protocol::Claims;

/// Claim name AWS STS reads session tags from.
pub const AWS_TAGS_CLAIM: &str = "https://aws.amazon.com/tags";

/// GitHub Actions claims copied into principal tags by default.
pub const DEFAULT_PRINCIPAL_TAG_CLAIMS: [&str; 9] = [
    "actor",
    "event_name",
    "ref",
    "repository",
    "run_attempt",
    "run_id",
    "run_number",
    "sha",
    "workflow",
];

/// Maximum number of session tags AWS accepts on one principal.
pub const MAX_SESSION_TAGS: usize = 50;

/// Maximum length of a session tag key.
pub const MAX_TAG_KEY_LEN: usize = 128;

/// Tag key -> single-element value sequence.
pub type PrincipalTags = BTreeMap<String, Vec<Value>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionTags {
    pub principal_tags: PrincipalTags,
    #[serde(default)]
    pub transitive_tag_keys: Vec<String>,
}

impl SessionTags {
    /// Tags with no transitive keys (role chaining does not inherit them).
    pub fn new(principal_tags: PrincipalTags) -> Self {
        Self {
            principal_tags,
            transitive_tag_keys: Vec::new(),
        }
    }

    /// Read the tag structure back out of mapped claims.
    ///
    /// Returns `None` when the claim is absent or not shaped like session tags.
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        let raw = claims.get(AWS_TAGS_CLAIM)?;
        serde_json::from_value(raw.clone()).ok()
    }

    /// Single value recorded for `key`, if any.
    pub fn tag(&self, key: &str) -> Option<&Value> {
        self.principal_tags.get(key).and_then(|v| v.first())
    }

    pub fn len(&self) -> usize {
        self.principal_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principal_tags.is_empty()
    }

    /// JSON form stored under `AWS_TAGS_CLAIM`; the inverse of `from_claims`.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| ClaimPrismError::Internal(format!("encode session tags failed: {e}")))
    }
}
