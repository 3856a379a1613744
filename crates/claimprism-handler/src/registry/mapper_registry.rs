use std::sync::Arc;

use dashmap::DashMap;

use claimprism_core::error::{ClaimPrismError, Result};
use claimprism_core::{Claims, Decision};

/// A mapper bound to one issuer.
pub trait MapperService: Send + Sync {
    fn issuer_id(&self) -> &str;
    fn map(&self, claims: Claims) -> Decision;
}

/// Issuer id -> mapper. Built at startup, read-only afterwards.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: DashMap<String, Arc<dyn MapperService>>,
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self {
            mappers: DashMap::new(),
        }
    }

    pub fn register(&self, svc: Arc<dyn MapperService>) {
        self.mappers.insert(svc.issuer_id().to_string(), svc);
    }

    pub fn registered_issuers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.mappers.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Find the mapper for `issuer_id`.
    ///
    /// Without an issuer id the request routes to the sole registered mapper;
    /// with several registered it is ambiguous.
    pub fn resolve(&self, issuer_id: Option<&str>) -> Result<Arc<dyn MapperService>> {
        match issuer_id {
            Some(id) => self
                .mappers
                .get(id)
                .map(|e| e.value().clone())
                .ok_or_else(|| ClaimPrismError::UnknownIssuer(id.to_string())),
            None => {
                if self.mappers.len() != 1 {
                    return Err(ClaimPrismError::BadRequest(
                        "issuerId is required when several issuers are configured".into(),
                    ));
                }
                self.mappers
                    .iter()
                    .next()
                    .map(|e| e.value().clone())
                    .ok_or_else(|| ClaimPrismError::Internal("registry emptied".into()))
            }
        }
    }

    pub fn dispatch(&self, issuer_id: Option<&str>, claims: Claims) -> Result<Decision> {
        let svc = self.resolve(issuer_id)?;
        Ok(svc.map(claims))
    }
}
