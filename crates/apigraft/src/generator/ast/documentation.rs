use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Accumulates doc-comment lines and renders them as `#[doc = "..."]`
/// attributes. An empty set renders nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub(crate) fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }

  pub(crate) fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }

  /// Splits raw text on newlines so multi-line descriptions keep their
  /// shape in the rendered comment.
  pub(crate) fn push_raw(&mut self, text: &str) {
    for line in text.lines() {
      self.lines.push(line.to_string());
    }
  }

  /// Inserts a separator line unless the documentation is still empty.
  pub(crate) fn push_blank(&mut self) {
    if !self.lines.is_empty() {
      self.lines.push(String::new());
    }
  }

  #[must_use]
  pub(crate) fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub(crate) fn lines(&self) -> &[String] {
    &self.lines
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    if self.is_empty() {
      return;
    }
    let lines = self.lines.iter().map(|line| {
      let line = if line.is_empty() {
        String::new()
      } else {
        format!(" {line}")
      };
      quote! { #[doc = #line] }
    });
    tokens.extend(lines);
  }
}
