//! Shared handler state: compiled issuer mappers plus request handling.

use std::sync::Arc;

use claimprism_core::error::{ClaimPrismError, Result};
use claimprism_core::{Decision, MapperRequest};

use crate::config::HandlerConfig;
use crate::obs::AuditEntry;
use crate::registry::MapperRegistry;
use crate::services::GithubActionsMapper;

#[derive(Clone)]
pub struct HandlerState {
    registry: Arc<MapperRegistry>,
}

impl HandlerState {
    /// Build handler state from a validated config.
    pub fn new(cfg: HandlerConfig) -> Result<Self> {
        let registry = MapperRegistry::new();

        for issuer in &cfg.issuers {
            issuer.mapper.validate(&issuer.id).map_err(|e| {
                ClaimPrismError::BadRequest(format!(
                    "issuer mapper compile failed (issuer={}): {e}",
                    issuer.id
                ))
            })?;

            let mapper = issuer.mapper.build();
            tracing::info!(
                issuer = %issuer.id,
                owner = %mapper.repository_owner(),
                tags = mapper.tag_claims().len(),
                missing_claim = mapper.missing_claim().as_str(),
                "issuer mapper registered"
            );
            registry.register(Arc::new(GithubActionsMapper::new(issuer.id.clone(), mapper)));
        }

        if registry.is_empty() {
            return Err(ClaimPrismError::BadRequest("no issuer mappers registered".into()));
        }

        tracing::info!(
            config_version = cfg.version,
            issuers = registry.len(),
            "handler ready"
        );

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn registry(&self) -> Arc<MapperRegistry> {
        Arc::clone(&self.registry)
    }

    /// Route a decoded request to its issuer's mapper.
    pub fn handle(&self, req: MapperRequest) -> Result<Decision> {
        req.check_version()?;

        let issuer_id = req.issuer_id.as_deref();
        let svc = self.registry.resolve(issuer_id)?;

        let entry_source = req.claims.clone();
        let decision = svc.map(req.claims);

        AuditEntry::decided(Some(svc.issuer_id()), &entry_source, &decision).emit();
        Ok(decision)
    }

    /// Decode and handle a raw request. Never fails: any rejection is a deny.
    pub fn respond(&self, raw: &str) -> Decision {
        let req = match MapperRequest::from_json(raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "rejecting undecodable mapper request");
                AuditEntry::rejected(None, e.client_code().as_str()).emit();
                return Decision::deny();
            }
        };

        let issuer_id = req.issuer_id.clone();
        match self.handle(req) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, issuer = ?issuer_id, "rejecting mapper request");
                AuditEntry::rejected(issuer_id.as_deref(), e.client_code().as_str()).emit();
                Decision::deny()
            }
        }
    }
}
