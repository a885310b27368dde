use http::Method;
use itertools::Itertools;
use oas3::spec::{ObjectOrReference, ObjectSchema, Operation, Parameter, Ref, Response};

use super::errors::GenerateError;

/// Schema name reserved for the structured problem shape. Responses that
/// reference it document failure paths and never contribute to a method's
/// return types.
pub(crate) const PROBLEM_TYPE: &str = "HttpProblem";

/// One `(status, content-type)` pair of an operation's response table,
/// resolved down to the referenced schema name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResponseEntry {
  pub(crate) status: String,
  pub(crate) content_type: String,
  pub(crate) type_name: String,
  pub(crate) description: Option<String>,
}

/// Read-only view over an API description that enumerates operations and
/// resolves their response tables in a canonical order.
pub(crate) struct SpecWalker<'a> {
  spec: &'a oas3::Spec,
}

impl<'a> SpecWalker<'a> {
  pub(crate) fn new(spec: &'a oas3::Spec) -> Self {
    Self { spec }
  }

  /// Every operation in emission order: paths in map order, methods sorted
  /// by name within a path.
  pub(crate) fn operations(&self) -> Vec<(String, Method, &'a Operation)> {
    let Some(paths) = &self.spec.paths else {
      return Vec::new();
    };

    let mut out = Vec::new();
    for (path, item) in paths {
      let mut methods: Vec<_> = item.methods().into_iter().collect();
      methods.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
      for (method, operation) in methods {
        out.push((path.clone(), method, operation));
      }
    }
    out
  }

  /// Resolves every response of `operation` to `(status, content type,
  /// schema name)` rows. Content declared without a resolvable schema
  /// reference is fatal.
  pub(crate) fn response_table(
    &self,
    path: &str,
    method: &Method,
    operation: &'a Operation,
  ) -> Result<Vec<ResponseEntry>, GenerateError> {
    let Some(responses) = &operation.responses else {
      return Ok(Vec::new());
    };

    let mut table = Vec::new();
    for (status, response) in responses {
      let response = self.resolve_response(response, path, method, status)?;
      for (content_type, media_type) in &response.content {
        let Some(type_name) = media_type.schema.as_ref().and_then(schema_ref_name) else {
          return Err(GenerateError::MissingSchemaRef {
            path: path.to_string(),
            method: method.to_string(),
            status: status.clone(),
          });
        };
        table.push(ResponseEntry {
          status: status.clone(),
          content_type: content_type.clone(),
          type_name,
          description: response.description.clone(),
        });
      }
    }
    Ok(table)
  }

  /// Ordered, de-duplicated success types of one response table, with the
  /// problem type filtered out.
  pub(crate) fn return_types(table: &[ResponseEntry]) -> Vec<String> {
    table
      .iter()
      .map(|entry| entry.type_name.clone())
      .filter(|name| name != PROBLEM_TYPE)
      .unique()
      .collect()
  }

  /// Ordered, de-duplicated media types of one response table, for the
  /// `Accept` header.
  pub(crate) fn accept_types(table: &[ResponseEntry]) -> Vec<String> {
    table
      .iter()
      .map(|entry| entry.content_type.clone())
      .unique()
      .collect()
  }

  /// Union of every operation's return types across the description, in
  /// first-appearance order. Drives import resolution.
  pub(crate) fn all_return_types(&self) -> Result<Vec<String>, GenerateError> {
    let mut names = Vec::new();
    for (path, method, operation) in self.operations() {
      let table = self.response_table(&path, &method, operation)?;
      names.extend(Self::return_types(&table));
    }
    Ok(names.into_iter().unique().collect())
  }

  /// Declared parameters with references resolved. Parameters that fail to
  /// resolve are skipped rather than fatal.
  pub(crate) fn resolve_parameters(&self, operation: &Operation) -> Vec<Parameter> {
    operation
      .parameters
      .iter()
      .filter_map(|parameter| parameter.resolve(self.spec).ok())
      .collect()
  }

  fn resolve_response(
    &self,
    response: &ObjectOrReference<Response>,
    path: &str,
    method: &Method,
    status: &str,
  ) -> Result<Response, GenerateError> {
    response
      .resolve(self.spec)
      .map_err(|_| GenerateError::UnresolvedReference {
        path: path.to_string(),
        method: method.to_string(),
        status: status.to_string(),
      })
  }
}

/// Extracts the component name from a `#/components/schemas/...` reference.
/// Inline schemas and foreign references have no name.
fn schema_ref_name(schema: &ObjectOrReference<ObjectSchema>) -> Option<String> {
  match schema {
    ObjectOrReference::Ref { ref_path, .. } => {
      if !ref_path.starts_with("#/components") {
        return None;
      }
      ref_path
        .parse::<Ref>()
        .ok()
        .map(|component| component.name)
    }
    ObjectOrReference::Object(_) => None,
  }
}
