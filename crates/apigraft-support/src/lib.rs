//! Runtime support for `apigraft`-generated API clients.
//!
//! Generated code stays thin: every method builds a path, a query map, and
//! an `Accept` header, then delegates to [`Transport::request`] for the
//! actual HTTP exchange and response classification.

pub use http::Method;
use indexmap::IndexMap;
pub use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
pub use serde_with::skip_serializing_none;

pub mod models;
mod problem;
mod transport;

pub use problem::{ApplicationError, Error, HttpProblem};
pub use transport::{CLIENT_HEADER, CLIENT_IDENT, Transport, VERSION_HEADER};

/// Query parameters for one request, in serialization order. Entries whose
/// value is `None` or an empty string are dropped by [`to_query_string`].
pub type QueryString = IndexMap<String, Option<String>>;

/// Request headers in insertion order.
pub type Headers = IndexMap<String, String>;

/// Characters escaped in query keys and values. Everything outside the RFC
/// 3986 unreserved set is percent-encoded, including spaces.
pub const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'~');

#[inline]
#[must_use]
pub fn percent_encode_query_component(component: &str) -> String {
  utf8_percent_encode(component, QUERY_ENCODE_SET).to_string()
}

/// Serializes query parameters into a `?`-prefixed query string.
///
/// Pairs are emitted in map order. A pair with no value, or an empty value,
/// is omitted entirely; when nothing survives the filter the result is an
/// empty string so the URL stays untouched.
#[must_use]
pub fn to_query_string(query: &QueryString) -> String {
  let pairs: Vec<String> = query
    .iter()
    .filter_map(|(key, value)| match value.as_deref() {
      Some(value) if !value.is_empty() => Some(format!(
        "{}={}",
        percent_encode_query_component(key),
        percent_encode_query_component(value)
      )),
      _ => None,
    })
    .collect();

  if pairs.is_empty() {
    String::new()
  } else {
    format!("?{}", pairs.join("&"))
  }
}

#[cfg(test)]
mod tests {
  use super::{QueryString, to_query_string};

  #[test]
  fn query_string_preserves_insertion_order() {
    let query = QueryString::from([
      (String::from("foo"), Some(String::from("bar"))),
      (String::from("bar"), Some(String::from("b a z"))),
    ]);
    assert_eq!(to_query_string(&query), "?foo=bar&bar=b%20a%20z");
  }

  #[test]
  fn query_string_drops_missing_and_empty_values() {
    let query = QueryString::from([
      (String::from("present"), Some(String::from("1"))),
      (String::from("missing"), None),
      (String::from("blank"), Some(String::new())),
    ]);
    assert_eq!(to_query_string(&query), "?present=1");
  }

  #[test]
  fn query_string_is_empty_when_nothing_survives() {
    let query = QueryString::from([(String::from("missing"), None)]);
    assert_eq!(to_query_string(&query), "");
    assert_eq!(to_query_string(&QueryString::new()), "");
  }

  #[test]
  fn query_string_escapes_keys_and_values() {
    let query = QueryString::from([(
      String::from("filter[name]"),
      Some(String::from("a/b&c=d")),
    )]);
    assert_eq!(to_query_string(&query), "?filter%5Bname%5D=a%2Fb%26c%3Dd");
  }
}
