use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::method::{ParamDef, ParamLocation};
use crate::generator::errors::GenerateError;

/// A path template with its leading slash stripped and every `{name}`
/// placeholder paired with the operation's matching path parameter, in
/// appearance order.
#[derive(Debug, Clone)]
pub(crate) struct PathTemplate {
  template: String,
  placeholders: Vec<Placeholder>,
}

#[derive(Debug, Clone)]
pub(crate) struct Placeholder {
  wire_name: String,
  param: ParamDef,
}

impl PathTemplate {
  /// Parses `path`, resolving placeholders against the declared parameters.
  /// Placeholders without a declared path parameter are fatal.
  pub(crate) fn parse(path: &str, params: &[ParamDef]) -> Result<Self, GenerateError> {
    let template = path.trim_start_matches('/').to_string();
    let mut placeholders = Vec::new();
    for name in template_params(&template) {
      let param = params
        .iter()
        .find(|param| param.wire_name == name && param.location == ParamLocation::Path)
        .ok_or_else(|| GenerateError::UndeclaredPlaceholder {
          path: path.to_string(),
          placeholder: name.to_string(),
        })?;
      placeholders.push(Placeholder {
        wire_name: name.to_string(),
        param: param.clone(),
      });
    }
    Ok(Self {
      template,
      placeholders,
    })
  }
}

/// Yields placeholder names between `{` and `}` in appearance order,
/// skipping empty pairs.
fn template_params(template: &str) -> TemplateParamIter<'_> {
  TemplateParamIter { rest: template }
}

struct TemplateParamIter<'a> {
  rest: &'a str,
}

impl<'a> Iterator for TemplateParamIter<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let open = self.rest.find('{')?;
      let after = &self.rest[open + 1..];
      let close = after.find('}')?;
      let name = &after[..close];
      self.rest = &after[close + 1..];
      if !name.is_empty() {
        return Some(name);
      }
    }
  }
}

impl ToTokens for PathTemplate {
  /// Renders the runtime path expression: the literal template with one
  /// `.replace` call chained per placeholder.
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let template = &self.template;
    let mut expr = quote! { String::from(#template) };
    for placeholder in &self.placeholders {
      let pattern = format!("{{{}}}", placeholder.wire_name);
      let value = placeholder.param.path_value_expr();
      expr = quote! { #expr.replace(#pattern, #value) };
    }
    expr.to_tokens(tokens);
  }
}

#[cfg(test)]
mod tests {
  use super::template_params;

  #[test]
  fn placeholders_come_back_in_appearance_order() {
    let names: Vec<&str> =
      template_params("tenants/{tenantId}/devices/{deviceId}/state").collect();
    assert_eq!(names, ["tenantId", "deviceId"]);
  }

  #[test]
  fn empty_and_unclosed_pairs_are_skipped() {
    let names: Vec<&str> = template_params("a/{}/b/{id}/c/{open").collect();
    assert_eq!(names, ["id"]);
  }

  #[test]
  fn plain_paths_have_no_placeholders() {
    assert_eq!(template_params("tenants/all").count(), 0);
  }
}
