use std::collections::HashSet;

use serde::Deserialize;

use claimprism_core::error::{ClaimPrismError, Result};
use claimprism_core::tags::{
    AWS_TAGS_CLAIM, DEFAULT_PRINCIPAL_TAG_CLAIMS, MAX_SESSION_TAGS, MAX_TAG_KEY_LEN,
};
use claimprism_core::{ClaimsMapper, MissingClaim};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    pub version: u32,

    #[serde(default)]
    pub issuers: Vec<IssuerConfig>,
}

impl HandlerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ClaimPrismError::UnsupportedVersion(self.version.to_string()));
        }
        if self.issuers.is_empty() {
            return Err(ClaimPrismError::BadRequest("issuers must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for issuer in &self.issuers {
            if issuer.id.trim().is_empty() {
                return Err(ClaimPrismError::BadRequest("issuers[].id must not be empty".into()));
            }
            if !seen.insert(issuer.id.as_str()) {
                return Err(ClaimPrismError::BadRequest(format!(
                    "duplicate issuer id: {}",
                    issuer.id
                )));
            }
            issuer.mapper.validate(&issuer.id)?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuerConfig {
    pub id: String,
    pub mapper: MapperConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapperConfig {
    pub repository_owner: String,

    #[serde(default = "default_principal_tag_claims")]
    pub principal_tag_claims: Vec<String>,

    #[serde(default)]
    pub missing_claim: MissingClaim,
}

impl MapperConfig {
    pub fn validate(&self, issuer: &str) -> Result<()> {
        if self.repository_owner.trim().is_empty() {
            return Err(ClaimPrismError::BadRequest(format!(
                "issuer {issuer}: mapper.repository_owner must not be empty"
            )));
        }
        if self.principal_tag_claims.is_empty() {
            return Err(ClaimPrismError::BadRequest(format!(
                "issuer {issuer}: mapper.principal_tag_claims must not be empty"
            )));
        }
        if self.principal_tag_claims.len() > MAX_SESSION_TAGS {
            return Err(ClaimPrismError::BadRequest(format!(
                "issuer {issuer}: at most {MAX_SESSION_TAGS} principal tags are allowed"
            )));
        }

        let mut seen = HashSet::new();
        for name in &self.principal_tag_claims {
            if name.is_empty() || name.chars().count() > MAX_TAG_KEY_LEN {
                return Err(ClaimPrismError::BadRequest(format!(
                    "issuer {issuer}: tag claim {name:?} must be 1..={MAX_TAG_KEY_LEN} characters"
                )));
            }
            if name == AWS_TAGS_CLAIM {
                return Err(ClaimPrismError::BadRequest(format!(
                    "issuer {issuer}: {AWS_TAGS_CLAIM} cannot be a tag claim"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ClaimPrismError::BadRequest(format!(
                    "issuer {issuer}: duplicate tag claim {name}"
                )));
            }
        }
        Ok(())
    }

    /// Build the runtime mapper described by this section.
    pub fn build(&self) -> ClaimsMapper {
        ClaimsMapper::new(self.repository_owner.clone())
            .with_tag_claims(self.principal_tag_claims.iter().cloned())
            .with_missing_claim(self.missing_claim)
    }
}

fn default_principal_tag_claims() -> Vec<String> {
    DEFAULT_PRINCIPAL_TAG_CLAIMS.iter().map(|s| s.to_string()).collect()
}
