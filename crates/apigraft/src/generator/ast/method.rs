use http::Method;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use strum::Display;
use syn::Ident;

use super::{Documentation, PathTemplate};

/// Primitive type a parameter maps to. Anything else in a description is
/// rejected before a `MethodDef` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamKind {
  Str,
  Bool,
}

/// Where a parameter travels on the wire. Other locations a description can
/// declare are rejected before a `MethodDef` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ParamLocation {
  Path,
  Query,
}

/// One method parameter in signature order.
#[derive(Debug, Clone)]
pub(crate) struct ParamDef {
  pub(crate) ident: Ident,
  pub(crate) wire_name: String,
  pub(crate) kind: ParamKind,
  pub(crate) required: bool,
  pub(crate) location: ParamLocation,
}

impl ParamDef {
  pub(crate) fn signature_type(&self) -> TokenStream {
    match (self.kind, self.required) {
      (ParamKind::Str, true) => quote! { &str },
      (ParamKind::Str, false) => quote! { Option<&str> },
      (ParamKind::Bool, true) => quote! { bool },
      (ParamKind::Bool, false) => quote! { Option<bool> },
    }
  }

  /// Expression substituted into the path for this parameter's placeholder.
  /// Absent optionals substitute as the empty string.
  pub(crate) fn path_value_expr(&self) -> TokenStream {
    let ident = &self.ident;
    match (self.kind, self.required) {
      (ParamKind::Str, true) => quote! { #ident },
      (ParamKind::Str, false) => quote! { #ident.unwrap_or_default() },
      (ParamKind::Bool, true) => quote! { &#ident.to_string() },
      (ParamKind::Bool, false) => {
        quote! { &#ident.map_or_else(String::new, |value| value.to_string()) }
      }
    }
  }

  /// Expression for this parameter's slot in the query map. Only string
  /// parameters reach here.
  pub(crate) fn query_value_expr(&self) -> TokenStream {
    let ident = &self.ident;
    if self.required {
      quote! { Some(String::from(#ident)) }
    } else {
      quote! { #ident.map(String::from) }
    }
  }

  pub(crate) fn schema_label(&self) -> &'static str {
    match self.kind {
      ParamKind::Str => "string",
      ParamKind::Bool => "boolean",
    }
  }
}

/// How a method reports success to its caller.
#[derive(Debug, Clone)]
pub(crate) enum ReturnKind {
  /// No declared success payload; the body, if any, is discarded.
  Unit,
  /// Exactly one declared payload type.
  Named(Ident),
  /// Two or more payload types, folded into an untagged enum.
  Union(UnionDef),
}

/// Untagged enum emitted alongside the client when an operation can succeed
/// with more than one payload shape.
#[derive(Debug, Clone)]
pub(crate) struct UnionDef {
  pub(crate) name: Ident,
  pub(crate) members: Vec<Ident>,
  pub(crate) method_name: String,
}

impl ToTokens for UnionDef {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = &self.name;
    let members = &self.members;
    let doc = format!(" Success payloads produced by `{}`.", self.method_name);
    quote! {
      #[doc = #doc]
      #[derive(Debug, Clone, serde::Deserialize)]
      #[serde(untagged)]
      pub enum #name {
        #(#members(#members),)*
      }
    }
    .to_tokens(tokens);
  }
}

/// Complete recipe for one generated client method.
#[derive(Debug, Clone)]
pub(crate) struct MethodDef {
  pub(crate) name: Ident,
  pub(crate) docs: Documentation,
  pub(crate) params: Vec<ParamDef>,
  pub(crate) http_method: Method,
  pub(crate) path: PathTemplate,
  pub(crate) accept: String,
  pub(crate) ret: ReturnKind,
}

impl MethodDef {
  fn return_type_tokens(&self) -> TokenStream {
    match &self.ret {
      ReturnKind::Unit => quote! { () },
      ReturnKind::Named(ident) => quote! { #ident },
      ReturnKind::Union(union) => {
        let name = &union.name;
        quote! { #name }
      }
    }
  }

  fn query_tokens(&self) -> TokenStream {
    let entries: Vec<TokenStream> = self
      .params
      .iter()
      .filter(|param| param.location == ParamLocation::Query)
      .map(|param| {
        let wire = &param.wire_name;
        let value = param.query_value_expr();
        quote! { (String::from(#wire), #value) }
      })
      .collect();
    if entries.is_empty() {
      quote! { QueryString::new() }
    } else {
      quote! { QueryString::from([#(#entries),*]) }
    }
  }

  fn finish_tokens(&self, method: &Ident) -> TokenStream {
    match &self.ret {
      ReturnKind::Unit => quote! {
        self.request(Method::#method, &path, &query, None, &headers).await?;
        Ok(())
      },
      ReturnKind::Named(_) | ReturnKind::Union(_) => quote! {
        let value = self.request(Method::#method, &path, &query, None, &headers).await?;
        Ok(serde_json::from_value(value.unwrap_or_default())?)
      },
    }
  }
}

impl ToTokens for MethodDef {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = &self.name;
    let docs = &self.docs;
    let params = self.params.iter().map(|param| {
      let ident = &param.ident;
      let ty = param.signature_type();
      quote! { #ident: #ty }
    });
    let method = format_ident!("{}", self.http_method.as_str());
    let path = &self.path;
    let query = self.query_tokens();
    let accept = &self.accept;
    let ret = self.return_type_tokens();
    let finish = self.finish_tokens(&method);

    quote! {
      #docs
      pub async fn #name(&self, #(#params),*) -> Result<#ret, Error> {
        let path = #path;
        let query = #query;
        let headers = Headers::from([(String::from("Accept"), String::from(#accept))]);
        #finish
      }
    }
    .to_tokens(tokens);
  }
}

#[cfg(test)]
mod tests {
  use proc_macro2::Span;
  use quote::quote;
  use syn::Ident;

  use super::{
    Documentation, MethodDef, ParamDef, ParamKind, ParamLocation, PathTemplate,
    ReturnKind, UnionDef,
  };

  fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
  }

  fn render(def: &MethodDef) -> String {
    let file: syn::File = syn::parse2(quote! { impl Client { #def } }).unwrap();
    prettyplease::unparse(&file)
  }

  #[test]
  fn unit_methods_discard_the_payload() {
    let def = MethodDef {
      name: ident("remove_gateway"),
      docs: Documentation::default(),
      params: Vec::new(),
      http_method: http::Method::DELETE,
      path: PathTemplate::parse("/gateways/all", &[]).unwrap(),
      accept: String::from("application/problem+json"),
      ret: ReturnKind::Unit,
    };
    let code = render(&def);
    assert!(code.contains("pub async fn remove_gateway"), "{code}");
    assert!(code.contains("Result<(), Error>"), "{code}");
    assert!(code.contains("Ok(())"), "{code}");
    assert!(code.contains("QueryString::new()"), "{code}");
  }

  #[test]
  fn optional_query_parameters_map_into_the_query() {
    let param = ParamDef {
      ident: ident("include_disabled"),
      wire_name: String::from("includeDisabled"),
      kind: ParamKind::Str,
      required: false,
      location: ParamLocation::Query,
    };
    let def = MethodDef {
      name: ident("list_gateways"),
      docs: Documentation::default(),
      params: vec![param],
      http_method: http::Method::GET,
      path: PathTemplate::parse("/gateways", &[]).unwrap(),
      accept: String::from("application/json"),
      ret: ReturnKind::Named(ident("GatewayList")),
    };
    let code = render(&def);
    assert!(code.contains("include_disabled: Option<&str>"), "{code}");
    assert!(code.contains("include_disabled.map(String::from)"), "{code}");
    assert!(code.contains("\"includeDisabled\""), "{code}");
  }

  #[test]
  fn unions_render_as_untagged_enums() {
    let union = UnionDef {
      name: ident("FetchDeviceStateResult"),
      members: vec![ident("DeviceState"), ident("StateDigest")],
      method_name: String::from("fetch_device_state"),
    };
    let file: syn::File = syn::parse2(quote! { #union }).unwrap();
    let code = prettyplease::unparse(&file);
    assert!(code.contains("#[serde(untagged)]"), "{code}");
    assert!(code.contains("pub enum FetchDeviceStateResult"), "{code}");
    assert!(code.contains("DeviceState(DeviceState)"), "{code}");
    assert!(code.contains("StateDigest(StateDigest)"), "{code}");
  }
}
