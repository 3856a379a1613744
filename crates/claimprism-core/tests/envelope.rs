//! Request envelope and decision encoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use claimprism_core::protocol::MAPPER_PROTOCOL_VERSION;
use claimprism_core::{map_claims, Decision, MapperRequest};

#[test]
fn parse_full_request() {
    let req = MapperRequest::from_json(
        r#"{"version":"1.0","issuerId":"github","claims":{"repository_owner":"octo-org"}}"#,
    )
    .unwrap();
    assert_eq!(req.version, "1.0");
    assert_eq!(req.issuer_id.as_deref(), Some("github"));
    assert_eq!(req.claims["repository_owner"], json!("octo-org"));
    req.check_version().unwrap();
}

#[test]
fn parse_bare_claims_shape() {
    let req = MapperRequest::from_json(r#"{"claims":{"actor":"alice"}}"#).unwrap();
    assert_eq!(req.version, MAPPER_PROTOCOL_VERSION);
    assert!(req.issuer_id.is_none());
    assert_eq!(req.claims.len(), 1);
}

#[test]
fn missing_claims_field_is_empty_and_denies() {
    let req = MapperRequest::from_json(r#"{"version":"1.0"}"#).unwrap();
    assert!(req.claims.is_empty());
    assert!(!map_claims(req.claims).is_allowed());
}

#[test]
fn unknown_envelope_fields_are_ignored() {
    let req = MapperRequest::from_json(r#"{"claims":{},"traceId":"abc"}"#).unwrap();
    assert!(req.claims.is_empty());
}

#[test]
fn unsupported_version() {
    let req = MapperRequest::from_json(r#"{"version":"2.0","claims":{}}"#).unwrap();
    let err = req.check_version().expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn malformed_json_is_bad_request() {
    let err = MapperRequest::from_json(r#"{"claims": [1, 2"#).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = MapperRequest::from_json(r#"{"claims": "nope"}"#).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn decision_encoding() {
    assert_eq!(Decision::deny().to_json().unwrap(), r#"{"allow":false}"#);

    let mut claims = claimprism_core::Claims::new();
    claims.insert("sub".into(), json!("x"));
    let s = Decision::allow(claims).to_json().unwrap();
    assert_eq!(s, r#"{"allow":true,"claims":{"sub":"x"}}"#);

    let back: Decision = serde_json::from_str(&s).unwrap();
    assert!(back.is_allowed());
}

#[test]
fn request_roundtrip_uses_camel_case() {
    let req = MapperRequest::new(Some("github".into()), Default::default());
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v, json!({ "version": "1.0", "issuerId": "github", "claims": {} }));
}
