use std::{collections::HashSet, sync::LazyLock};

use inflections::Inflect;
use proc_macro2::Span;
use regex::Regex;
use syn::Ident;

static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
    "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Reduces a declared name to ASCII letters, digits, and single underscores.
fn sanitize(input: &str) -> String {
  let replaced = INVALID_CHARS_RE.replace_all(input, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");
  collapsed.trim_matches('_').to_string()
}

/// Converts a declared name into a snake_case value identifier, or `None`
/// when nothing usable is left after sanitizing.
pub(crate) fn to_rust_ident(name: &str) -> Option<Ident> {
  let mut ident = sanitize(name).to_snake_case();
  if ident.is_empty() {
    return None;
  }
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }
  match ident.as_str() {
    // Not even raw identifiers may spell these.
    "self" | "crate" | "super" => ident.push('_'),
    keyword if FORBIDDEN_IDENTIFIERS.contains(keyword) => {
      return Some(Ident::new_raw(&ident, Span::call_site()));
    }
    _ => {}
  }
  Some(Ident::new(&ident, Span::call_site()))
}

/// Converts a declared name into a PascalCase type stem.
pub(crate) fn to_pascal_ident(name: &str) -> Option<Ident> {
  let mut pascal = sanitize(name).to_pascal_case();
  if pascal.is_empty() {
    return None;
  }
  if pascal.starts_with(|c: char| c.is_ascii_digit()) {
    pascal.insert(0, 'T');
  }
  Some(Ident::new(&pascal, Span::call_site()))
}

/// Schema names are used verbatim when they already form an identifier, and
/// fall back to PascalCase sanitizing otherwise.
pub(crate) fn to_type_ident(name: &str) -> Option<Ident> {
  syn::parse_str::<Ident>(name)
    .ok()
    .or_else(|| to_pascal_ident(name))
}
