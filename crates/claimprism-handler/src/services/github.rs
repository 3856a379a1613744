//! GitHub Actions OIDC mapper: organization gate plus run metadata tags.

use claimprism_core::{Claims, ClaimsMapper, Decision};

use crate::registry::MapperService;

pub struct GithubActionsMapper {
    issuer_id: String,
    mapper: ClaimsMapper,
}

impl GithubActionsMapper {
    pub fn new(issuer_id: impl Into<String>, mapper: ClaimsMapper) -> Self {
        Self {
            issuer_id: issuer_id.into(),
            mapper,
        }
    }
}

impl MapperService for GithubActionsMapper {
    fn issuer_id(&self) -> &str {
        &self.issuer_id
    }

    fn map(&self, claims: Claims) -> Decision {
        self.mapper.map(claims)
    }
}
