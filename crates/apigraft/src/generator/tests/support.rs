use oas3::Spec;

use crate::generator::{
  errors::GenerateError,
  orchestrator::{GenerationStats, GeneratorOptions, Orchestrator},
};

pub(super) const SKELETON: &str = include_str!("../../../skeleton/client.rs");

pub(super) fn parse_spec(spec_json: &str) -> Spec {
  oas3::from_json(spec_json).expect("failed to parse test description")
}

/// Wraps a `paths` object in a minimal description with one server.
pub(super) fn spec_with_paths(paths: serde_json::Value) -> String {
  serde_json::json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "9.9.9" },
    "servers": [{ "url": "https://api.test.example.com/" }],
    "paths": paths
  })
  .to_string()
}

pub(super) fn generate(spec_json: &str) -> (String, GenerationStats) {
  Orchestrator::new(parse_spec(spec_json), GeneratorOptions::default())
    .generate(SKELETON)
    .expect("generation should succeed")
}

pub(super) fn generate_err(spec_json: &str) -> GenerateError {
  Orchestrator::new(parse_spec(spec_json), GeneratorOptions::default())
    .generate(SKELETON)
    .expect_err("generation should fail")
}

pub(super) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(
    code.contains(expected),
    "expected {context} in generated code\nmissing: {expected}\n---\n{code}"
  );
}

pub(super) fn assert_not_contains(code: &str, unexpected: &str, context: &str) {
  assert!(
    !code.contains(unexpected),
    "did not expect {context} in generated code\nfound: {unexpected}\n---\n{code}"
  );
}
