//! Drives a full generation run: plan the client from the description, then
//! augment the skeleton and serialize the result. Nothing here touches the
//! filesystem; callers own all I/O.

use apigraft_support::models::SHARED_MODELS;

use super::{assembler, errors::GenerateError, synthesizer};

/// Caller-supplied options that shape the generated doc block.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
  pub homepage: Option<String>,
  pub author: Option<String>,
}

/// Statistics about a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationStats {
  /// Client methods emitted, one per operation.
  pub methods_generated: usize,
  /// Untagged union enums emitted for multi-payload operations.
  pub unions_generated: usize,
  /// Return types imported from the shared model catalog.
  pub shared_imports: usize,
  /// Return types imported from the host crate's local types module.
  pub local_imports: usize,
  /// Generated method names, in emission order.
  pub method_names: Vec<String>,
}

/// Description metadata surfaced in headers and logs.
#[derive(Debug, Clone)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

pub struct Orchestrator {
  spec: oas3::Spec,
  options: GeneratorOptions,
}

impl Orchestrator {
  #[must_use]
  pub fn new(spec: oas3::Spec, options: GeneratorOptions) -> Self {
    Self { spec, options }
  }

  #[must_use]
  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.spec.info.title.clone(),
      version: self.spec.info.version.clone(),
      description: self.spec.info.description.clone(),
    }
  }

  /// Produces the complete client source for `skeleton`, formatted, plus
  /// the run's statistics. The skeleton text is parsed fresh on every call,
  /// so repeated runs are reproducible.
  pub fn generate(&self, skeleton: &str) -> Result<(String, GenerationStats), GenerateError> {
    let plan = synthesizer::build_plan(&self.spec, &self.options)?;
    let skeleton = assembler::parse_skeleton(skeleton)?;
    let file = assembler::augment(&skeleton, &plan)?;
    let code = prettyplease::unparse(&file);

    let shared_imports = plan
      .return_types
      .iter()
      .filter(|name| SHARED_MODELS.contains(&name.as_str()))
      .count();
    let stats = GenerationStats {
      methods_generated: plan.methods.len(),
      unions_generated: plan.unions.len(),
      shared_imports,
      local_imports: plan.return_types.len() - shared_imports,
      method_names: plan.methods.iter().map(|method| method.name.to_string()).collect(),
    };
    Ok((code, stats))
  }

  /// Like [`generate`](Self::generate), with a provenance banner prepended.
  pub fn generate_with_header(
    &self,
    skeleton: &str,
    source_path: &str,
  ) -> Result<(String, GenerationStats), GenerateError> {
    let (code, stats) = self.generate(skeleton)?;
    let metadata = self.metadata();
    let header = format!(
      r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! {} client
//! Source: {}
//! Version: {}
//! Generated by `apigraft`

",
      metadata.title, source_path, metadata.version
    );
    Ok((format!("{header}{code}"), stats))
  }
}
