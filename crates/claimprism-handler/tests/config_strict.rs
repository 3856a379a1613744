#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use claimprism_core::tags::DEFAULT_PRINCIPAL_TAG_CLAIMS;
use claimprism_core::MissingClaim;
use claimprism_handler::config;

fn code_of(yaml: &str) -> &'static str {
    config::load_from_str(yaml).expect_err("must fail").client_code().as_str()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      missing_claims: omit # typo should fail
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.issuers[0].id, "github");

    let mapper = &cfg.issuers[0].mapper;
    assert_eq!(mapper.missing_claim, MissingClaim::Null);
    assert_eq!(mapper.principal_tag_claims, DEFAULT_PRINCIPAL_TAG_CLAIMS.to_vec());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      principal_tag_claims: ["repository", "ref", "environment"]
      missing_claim: empty_string
  - id: "github-enterprise"
    mapper:
      repository_owner: "acme"
      missing_claim: deny
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.issuers.len(), 2);
    assert_eq!(cfg.issuers[0].mapper.principal_tag_claims.len(), 3);
    assert_eq!(cfg.issuers[0].mapper.missing_claim, MissingClaim::EmptyString);
    assert_eq!(cfg.issuers[1].mapper.missing_claim, MissingClaim::Deny);
}

#[test]
fn unknown_missing_claim_policy() {
    let bad = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      missing_claim: undefined
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn wrong_version() {
    let bad = r#"
version: 2
issuers:
  - id: "github"
    mapper: { repository_owner: "octo-org" }
"#;
    assert_eq!(code_of(bad), "UNSUPPORTED_VERSION");
}

#[test]
fn issuers_required() {
    assert_eq!(code_of("version: 1\n"), "BAD_REQUEST");
    assert_eq!(code_of("version: 1\nissuers: []\n"), "BAD_REQUEST");
}

#[test]
fn duplicate_issuer_ids() {
    let bad = r#"
version: 1
issuers:
  - id: "github"
    mapper: { repository_owner: "octo-org" }
  - id: "github"
    mapper: { repository_owner: "acme" }
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn empty_owner() {
    let bad = r#"
version: 1
issuers:
  - id: "github"
    mapper: { repository_owner: "  " }
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn tag_claim_rules() {
    let dup = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      principal_tag_claims: ["sha", "sha"]
"#;
    assert_eq!(code_of(dup), "BAD_REQUEST");

    let empty = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      principal_tag_claims: []
"#;
    assert_eq!(code_of(empty), "BAD_REQUEST");

    let self_ref = r#"
version: 1
issuers:
  - id: "github"
    mapper:
      repository_owner: "octo-org"
      principal_tag_claims: ["https://aws.amazon.com/tags"]
"#;
    assert_eq!(code_of(self_ref), "BAD_REQUEST");

    let long_key = format!(
        "version: 1\nissuers:\n  - id: github\n    mapper:\n      repository_owner: octo-org\n      principal_tag_claims: [\"{}\"]\n",
        "k".repeat(129)
    );
    assert_eq!(code_of(&long_key), "BAD_REQUEST");

    let names: Vec<String> = (0..51).map(|i| format!("\"c{i}\"")).collect();
    let too_many = format!(
        "version: 1\nissuers:\n  - id: github\n    mapper:\n      repository_owner: octo-org\n      principal_tag_claims: [{}]\n",
        names.join(", ")
    );
    assert_eq!(code_of(&too_many), "BAD_REQUEST");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn missing_claim_null_quoted_or_not() {
    for policy in ["null", "\"null\""] {
        let yaml = format!(
            "version: 1\nissuers:\n  - id: github\n    mapper:\n      repository_owner: octo-org\n      missing_claim: {policy}\n"
        );
        let cfg = config::load_from_str(&yaml).expect("must parse");
        assert_eq!(cfg.issuers[0].mapper.missing_claim, MissingClaim::Null, "policy={policy}");
    }
}
