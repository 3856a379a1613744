//! Claims mapper: repository-owner gate plus principal tag projection.
//!
//! The mapper allows a token only when its `repository_owner` claim equals
//! the configured organization, then copies a fixed list of claims into AWS
//! session tags. Claims are taken by value and handed back inside the
//! decision, so callers never observe their own map being mutated.
//!
//! Mapping a decision's claims a second time allows again and rewrites the
//! same tags: the owner claim is left untouched and the tags claim is
//! overwritten.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::protocol::{Claims, Decision};
use crate::tags::{PrincipalTags, SessionTags, AWS_TAGS_CLAIM, DEFAULT_PRINCIPAL_TAG_CLAIMS};

/// Organization the default mapper admits.
pub const DEFAULT_REPOSITORY_OWNER: &str = "octo-org";

/// Claim holding the owning organization of the repository.
pub const REPOSITORY_OWNER_CLAIM: &str = "repository_owner";

/// What to do when a tag claim is absent from the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingClaim {
    /// Tag the absent claim as `[null]`.
    #[default]
    Null,
    /// Tag the absent claim as `[""]`.
    EmptyString,
    /// Leave the key out of the principal tags.
    Omit,
    /// Deny the whole request.
    Deny,
}

impl MissingClaim {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingClaim::Null => "null",
            MissingClaim::EmptyString => "empty_string",
            MissingClaim::Omit => "omit",
            MissingClaim::Deny => "deny",
        }
    }
}

/// Configured mapper for one issuer.
#[derive(Debug, Clone)]
pub struct ClaimsMapper {
    repository_owner: String,
    tag_claims: Vec<String>,
    missing: MissingClaim,
}

impl Default for ClaimsMapper {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORY_OWNER)
    }
}

impl ClaimsMapper {
    /// Mapper for `repository_owner` with the default tag claims and policy.
    pub fn new(repository_owner: impl Into<String>) -> Self {
        Self {
            repository_owner: repository_owner.into(),
            tag_claims: DEFAULT_PRINCIPAL_TAG_CLAIMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            missing: MissingClaim::default(),
        }
    }

    pub fn with_tag_claims<I, S>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_claims = claims.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_missing_claim(mut self, missing: MissingClaim) -> Self {
        self.missing = missing;
        self
    }

    pub fn repository_owner(&self) -> &str {
        &self.repository_owner
    }

    pub fn tag_claims(&self) -> &[String] {
        &self.tag_claims
    }

    pub fn missing_claim(&self) -> MissingClaim {
        self.missing
    }

    /// True when the owner claim is a string equal to the configured owner.
    pub fn owner_matches(&self, claims: &Claims) -> bool {
        claims.get(REPOSITORY_OWNER_CLAIM).and_then(Value::as_str)
            == Some(self.repository_owner.as_str())
    }

    /// Project the tag claims into principal tags.
    ///
    /// Returns `None` only under `MissingClaim::Deny` when a claim is absent.
    pub fn principal_tags(&self, claims: &Claims) -> Option<PrincipalTags> {
        let mut tags = PrincipalTags::new();
        for name in &self.tag_claims {
            let value = match claims.get(name) {
                Some(v) => v.clone(),
                None => match self.missing {
                    MissingClaim::Null => Value::Null,
                    MissingClaim::EmptyString => Value::String(String::new()),
                    MissingClaim::Omit => continue,
                    MissingClaim::Deny => {
                        tracing::debug!(claim = %name, "tag claim missing, denying");
                        return None;
                    }
                },
            };
            tags.insert(name.clone(), vec![value]);
        }
        Some(tags)
    }

    pub fn map(&self, mut claims: Claims) -> Decision {
        if !self.owner_matches(&claims) {
            tracing::debug!(owner = %self.repository_owner, "repository owner mismatch");
            return Decision::deny();
        }

        let Some(principal_tags) = self.principal_tags(&claims) else {
            return Decision::deny();
        };

        let tags = SessionTags::new(principal_tags);
        let value = match tags.to_value() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "session tags not encodable, denying");
                return Decision::deny();
            }
        };
        tracing::debug!(tags = tags.len(), "claims mapped");
        claims.insert(AWS_TAGS_CLAIM.into(), value);
        Decision::allow(claims)
    }
}

/// Map claims with the default mapper (`octo-org`, default tag claims,
/// missing claims tagged as `[null]`).
pub fn map_claims(claims: Claims) -> Decision {
    ClaimsMapper::default().map(claims)
}
