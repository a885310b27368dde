use std::collections::HashSet;

use http::Method;
use oas3::spec::{ObjectOrReference, Operation, Parameter, ParameterIn, SchemaType, SchemaTypeSet};
use quote::format_ident;
use syn::Ident;

use super::{
  ast::{
    Documentation, MethodDef, ParamDef, ParamKind, ParamLocation, PathTemplate, ReturnKind,
    UnionDef,
  },
  errors::GenerateError,
  naming,
  orchestrator::GeneratorOptions,
  walker::{ResponseEntry, SpecWalker},
};

/// Everything the assembler needs to augment a skeleton, derived entirely
/// from the description and the caller's options.
#[derive(Debug)]
pub(crate) struct GenerationPlan {
  pub(crate) methods: Vec<MethodDef>,
  pub(crate) unions: Vec<UnionDef>,
  /// Return types across all operations, in first-appearance order.
  pub(crate) return_types: Vec<String>,
  pub(crate) title: String,
  pub(crate) version: String,
  pub(crate) default_endpoint: String,
  pub(crate) homepage: Option<String>,
  pub(crate) author: Option<String>,
}

pub(crate) fn build_plan(
  spec: &oas3::Spec,
  options: &GeneratorOptions,
) -> Result<GenerationPlan, GenerateError> {
  let walker = SpecWalker::new(spec);
  let default_endpoint = spec
    .servers
    .first()
    .map(|server| server.url.clone())
    .ok_or(GenerateError::MissingDefaultEndpoint)?;

  let mut methods: Vec<MethodDef> = Vec::new();
  let mut unions = Vec::new();
  let mut seen = HashSet::new();

  for (path, http_method, operation) in walker.operations() {
    let method = synthesize_method(&walker, &path, &http_method, operation)?;
    if !seen.insert(method.name.to_string()) {
      return Err(GenerateError::DuplicateOperationId {
        operation: operation.operation_id.clone().unwrap_or_default(),
        method: method.name.to_string(),
      });
    }
    if let ReturnKind::Union(union) = &method.ret {
      unions.push(union.clone());
    }
    methods.push(method);
  }

  // CLI overrides win; otherwise authorship comes from the description's contact object.
  let contact = spec.info.contact.as_ref();
  let homepage = options
    .homepage
    .clone()
    .or_else(|| contact.and_then(|contact| contact.url.as_ref().map(|url| url.to_string())));
  let author = options
    .author
    .clone()
    .or_else(|| contact.and_then(|contact| contact.name.clone()));

  Ok(GenerationPlan {
    methods,
    unions,
    return_types: walker.all_return_types()?,
    title: spec.info.title.clone(),
    version: spec.info.version.clone(),
    default_endpoint,
    homepage,
    author,
  })
}

fn synthesize_method(
  walker: &SpecWalker,
  path: &str,
  http_method: &Method,
  operation: &Operation,
) -> Result<MethodDef, GenerateError> {
  let operation_id = operation
    .operation_id
    .as_deref()
    .filter(|id| !id.is_empty())
    .ok_or_else(|| GenerateError::MissingOperationId {
      path: path.to_string(),
      method: http_method.to_string(),
    })?;
  let name = naming::to_rust_ident(operation_id).ok_or_else(|| {
    GenerateError::InvalidOperationId {
      operation: operation_id.to_string(),
    }
  })?;

  let params = build_params(walker, operation_id, operation)?;
  let table = walker.response_table(path, http_method, operation)?;
  let accept = SpecWalker::accept_types(&table).join(", ");
  let ret = build_return(operation_id, &name, &SpecWalker::return_types(&table))?;
  let docs = build_docs(operation, http_method, path, &table, &params);
  let path_template = PathTemplate::parse(path, &params)?;

  Ok(MethodDef {
    name,
    docs,
    params,
    http_method: http_method.clone(),
    path: path_template,
    accept,
    ret,
  })
}

fn build_params(
  walker: &SpecWalker,
  operation_id: &str,
  operation: &Operation,
) -> Result<Vec<ParamDef>, GenerateError> {
  let mut defs = Vec::new();
  let mut seen = HashSet::new();

  for parameter in walker.resolve_parameters(operation) {
    let def = build_param(operation_id, &parameter)?;
    if !seen.insert(def.ident.to_string()) {
      return Err(GenerateError::DuplicateParameter {
        operation: operation_id.to_string(),
        parameter: parameter.name.clone(),
      });
    }
    defs.push(def);
  }

  // Required parameters lead the signature; declaration order is otherwise
  // preserved.
  let (required, optional): (Vec<_>, Vec<_>) = defs.into_iter().partition(|def| def.required);
  Ok(required.into_iter().chain(optional).collect())
}

fn build_param(operation_id: &str, parameter: &Parameter) -> Result<ParamDef, GenerateError> {
  // Only path and query parameters ever reach a generated signature.
  let location = match parameter.location {
    ParameterIn::Path => ParamLocation::Path,
    ParameterIn::Query => ParamLocation::Query,
    ParameterIn::Header | ParameterIn::Cookie => {
      return Err(GenerateError::UnsupportedParameterLocation {
        operation: operation_id.to_string(),
        parameter: parameter.name.clone(),
        location: location_label(&parameter.location).to_string(),
      });
    }
  };
  let kind = param_kind(operation_id, parameter)?;
  if kind == ParamKind::Bool && location == ParamLocation::Query {
    return Err(GenerateError::BooleanQueryParameter {
      operation: operation_id.to_string(),
      parameter: parameter.name.clone(),
    });
  }
  let ident = naming::to_rust_ident(&parameter.name).ok_or_else(|| {
    GenerateError::InvalidParameterName {
      operation: operation_id.to_string(),
      parameter: parameter.name.clone(),
    }
  })?;

  Ok(ParamDef {
    ident,
    wire_name: parameter.name.clone(),
    kind,
    required: parameter.required.unwrap_or(false),
    location,
  })
}

fn param_kind(operation_id: &str, parameter: &Parameter) -> Result<ParamKind, GenerateError> {
  let unsupported = |label: &str| GenerateError::UnsupportedSchemaType {
    operation: operation_id.to_string(),
    parameter: parameter.name.clone(),
    schema_type: label.to_string(),
  };

  // Parameter schemas are read as declared; references are not chased.
  let Some(ObjectOrReference::Object(schema)) = &parameter.schema else {
    return Err(unsupported("unspecified"));
  };
  match &schema.schema_type {
    Some(SchemaTypeSet::Single(SchemaType::String)) => Ok(ParamKind::Str),
    Some(SchemaTypeSet::Single(SchemaType::Boolean)) => Ok(ParamKind::Bool),
    Some(SchemaTypeSet::Single(other)) => Err(unsupported(type_label(other))),
    Some(SchemaTypeSet::Multiple(_)) => Err(unsupported("mixed")),
    None => Err(unsupported("unspecified")),
  }
}

fn type_label(schema_type: &SchemaType) -> &'static str {
  match schema_type {
    SchemaType::Boolean => "boolean",
    SchemaType::Integer => "integer",
    SchemaType::Number => "number",
    SchemaType::String => "string",
    SchemaType::Array => "array",
    SchemaType::Object => "object",
    SchemaType::Null => "null",
  }
}

fn location_label(location: &ParameterIn) -> &'static str {
  match location {
    ParameterIn::Path => "path",
    ParameterIn::Query => "query",
    ParameterIn::Header => "header",
    ParameterIn::Cookie => "cookie",
  }
}

fn build_return(
  operation_id: &str,
  method_name: &Ident,
  return_names: &[String],
) -> Result<ReturnKind, GenerateError> {
  match return_names {
    [] => Ok(ReturnKind::Unit),
    [single] => Ok(ReturnKind::Named(type_ident(single)?)),
    many => {
      let stem = naming::to_pascal_ident(operation_id).ok_or_else(|| {
        GenerateError::InvalidOperationId {
          operation: operation_id.to_string(),
        }
      })?;
      let members = many
        .iter()
        .map(|name| type_ident(name))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(ReturnKind::Union(UnionDef {
        name: format_ident!("{}Result", stem),
        members,
        method_name: method_name.to_string(),
      }))
    }
  }
}

fn type_ident(name: &str) -> Result<Ident, GenerateError> {
  naming::to_type_ident(name).ok_or_else(|| GenerateError::InvalidSchemaName {
    name: name.to_string(),
  })
}

fn build_docs(
  operation: &Operation,
  http_method: &Method,
  path: &str,
  table: &[ResponseEntry],
  params: &[ParamDef],
) -> Documentation {
  let mut docs = Documentation::default();
  if let Some(summary) = operation.summary.as_deref().filter(|text| !text.is_empty()) {
    docs.push_raw(summary);
  }
  if let Some(description) = operation
    .description
    .as_deref()
    .filter(|text| !text.is_empty())
  {
    docs.push_blank();
    docs.push_raw(description);
  }
  docs.push_blank();
  docs.push(format!("`{http_method} {path}`"));

  if !table.is_empty() {
    docs.push_blank();
    docs.push("# Responses");
    for entry in table {
      let mut line = format!("- {} {}: `{}`", entry.status, entry.content_type, entry.type_name);
      if let Some(description) = entry
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
      {
        line.push_str(&format!(" ({})", description.replace('\n', " ")));
      }
      docs.push(line);
    }
  }

  if !params.is_empty() {
    docs.push_blank();
    docs.push("# Parameters");
    for param in params {
      docs.push(format!(
        "- `{}` ({}, {}, {})",
        param.ident,
        param.schema_label(),
        if param.required { "required" } else { "optional" },
        param.location
      ));
    }
  }

  docs.push_blank();
  docs.push("# Errors");
  docs.push("- [`Error::ContentType`] when the response media type is not accepted");
  docs.push("- [`Error::Problem`] when an error status carries a problem document");
  docs.push("- [`Error::Application`] for any other error status");
  docs
}
