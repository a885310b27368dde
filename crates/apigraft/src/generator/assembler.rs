use apigraft_support::models::SHARED_MODELS;
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{File, ImplItem, Item, ItemImpl, ItemStruct, LitStr};

use super::{ast::Documentation, errors::GenerateError, naming, synthesizer::GenerationPlan};

/// Name of the skeleton constant that receives the description's version.
pub(crate) const VERSION_CONST: &str = "API_VERSION";

pub(crate) fn parse_skeleton(source: &str) -> Result<File, GenerateError> {
  syn::parse_file(source).map_err(|err| GenerateError::SkeletonParse {
    message: err.to_string(),
  })
}

/// Merges the generation plan into the skeleton tree. Pure on its inputs:
/// the same skeleton and plan always produce the same file.
///
/// The skeleton's `use` items, struct, inherent impl, and any further items
/// survive; the version constant's value is replaced, constructors are
/// inserted after it, and generated methods, imports, and union enums are
/// added around them.
pub(crate) fn augment(skeleton: &File, plan: &GenerationPlan) -> Result<File, GenerateError> {
  let mut uses = Vec::new();
  let mut strukt: Option<ItemStruct> = None;
  let mut imp: Option<ItemImpl> = None;
  let mut rest = Vec::new();

  for item in &skeleton.items {
    match item {
      Item::Use(_) => uses.push(item.clone()),
      Item::Struct(item_struct) if strukt.is_none() => strukt = Some(item_struct.clone()),
      Item::Impl(item_impl) if item_impl.trait_.is_none() && imp.is_none() => {
        imp = Some(item_impl.clone());
      }
      other => rest.push(other.clone()),
    }
  }

  let mut strukt = strukt.ok_or(GenerateError::MissingClientStruct)?;
  let mut imp = imp.ok_or_else(|| GenerateError::MissingClientImpl {
    name: strukt.ident.to_string(),
  })?;

  if !has_transport_field(&strukt) {
    return Err(GenerateError::MissingTransportField {
      name: strukt.ident.to_string(),
    });
  }

  let version = LitStr::new(&plan.version, Span::call_site());
  let mut version_index = None;
  for (index, item) in imp.items.iter_mut().enumerate() {
    if let ImplItem::Const(konst) = item
      && konst.ident == VERSION_CONST
    {
      konst.expr = syn::parse_quote! { #version };
      version_index = Some(index);
      break;
    }
  }
  let Some(version_index) = version_index else {
    return Err(GenerateError::MissingVersionConst);
  };

  for (offset, constructor) in build_constructors(plan)?.into_iter().enumerate() {
    imp.items.insert(version_index + 1 + offset, constructor);
  }
  for method in &plan.methods {
    imp.items.push(parse_impl_item(method.to_token_stream())?);
  }

  strukt.attrs.retain(|attr| !attr.path().is_ident("doc"));
  strukt.attrs.splice(0..0, doc_attrs(&struct_docs(plan)));

  let mut items = Vec::with_capacity(skeleton.items.len() + plan.methods.len() + 4);
  items.extend(uses);
  items.extend(build_imports(plan)?);
  items.push(Item::Struct(strukt));
  items.push(Item::Impl(imp));
  for union in &plan.unions {
    items.push(parse_item(union.to_token_stream())?);
  }
  items.extend(rest);

  Ok(File {
    shebang: None,
    attrs: Vec::new(),
    items,
  })
}

fn has_transport_field(strukt: &ItemStruct) -> bool {
  strukt
    .fields
    .iter()
    .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "transport"))
}

fn build_constructors(plan: &GenerationPlan) -> Result<Vec<ImplItem>, GenerateError> {
  let endpoint = LitStr::new(&plan.default_endpoint, Span::call_site());
  let new_doc = format!(
    " Creates a client for the default endpoint `{}`.",
    plan.default_endpoint
  );
  [
    quote! {
      #[doc = #new_doc]
      #[must_use]
      pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, #endpoint)
      }
    },
    quote! {
      /// Creates a client against a custom endpoint.
      #[must_use]
      pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
          transport: Transport::new(token, endpoint, Self::API_VERSION),
        }
      }
    },
  ]
  .into_iter()
  .map(parse_impl_item)
  .collect()
}

fn build_imports(plan: &GenerationPlan) -> Result<Vec<Item>, GenerateError> {
  let mut items = Vec::new();
  for name in &plan.return_types {
    let ident = naming::to_type_ident(name).ok_or_else(|| GenerateError::InvalidSchemaName {
      name: name.clone(),
    })?;
    let import: Item = if SHARED_MODELS.contains(&name.as_str()) {
      syn::parse_quote! { use apigraft_support::models::#ident; }
    } else {
      syn::parse_quote! { use super::types::#ident; }
    };
    items.push(import);
  }
  // Error construction helpers, imported whether or not this description
  // declares problem responses.
  items.push(syn::parse_quote! {
    #[allow(unused_imports)]
    use apigraft_support::{ApplicationError, HttpProblem};
  });
  Ok(items)
}

fn struct_docs(plan: &GenerationPlan) -> Documentation {
  let mut docs = Documentation::from_lines([format!("API client for {}.", plan.title)]);
  docs.push_blank();
  docs.push(format!(
    "Generated for version {} of the API description.",
    plan.version
  ));

  let mut contact_started = false;
  if let Some(homepage) = plan.homepage.as_deref().filter(|text| !text.is_empty()) {
    docs.push_blank();
    docs.push(format!("Homepage: <{homepage}>"));
    contact_started = true;
  }
  if let Some(author) = plan.author.as_deref().filter(|text| !text.is_empty()) {
    if !contact_started {
      docs.push_blank();
    }
    docs.push(format!("Author: {author}"));
  }
  docs
}

fn doc_attrs(docs: &Documentation) -> Vec<syn::Attribute> {
  docs
    .lines()
    .iter()
    .map(|line| {
      let line = if line.is_empty() {
        String::new()
      } else {
        format!(" {line}")
      };
      syn::parse_quote!(#[doc = #line])
    })
    .collect()
}

fn parse_impl_item(tokens: TokenStream) -> Result<ImplItem, GenerateError> {
  syn::parse2(tokens).map_err(render_error)
}

fn parse_item(tokens: TokenStream) -> Result<Item, GenerateError> {
  syn::parse2(tokens).map_err(render_error)
}

fn render_error(err: syn::Error) -> GenerateError {
  GenerateError::Render {
    message: err.to_string(),
  }
}
