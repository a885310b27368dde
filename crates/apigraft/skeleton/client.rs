//! Client skeleton consumed by `apigraft generate`.
//!
//! The generator keeps the imports, struct, and inherent impl below, swaps
//! the value of `API_VERSION` for the description's version, inserts
//! constructors after it, and appends one method per operation. Generated
//! methods funnel every exchange through `request`.

use apigraft_support::{Error, Headers, Method, QueryString, Transport};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Client {
  transport: Transport,
}

impl Client {
  /// Protocol version advertised to the service on every request.
  pub const API_VERSION: &'static str = "0.0.0";

  async fn request(
    &self,
    method: Method,
    path: &str,
    query: &QueryString,
    body: Option<&Value>,
    headers: &Headers,
  ) -> Result<Option<Value>, Error> {
    self.transport.request(method, path, query, body, headers).await
  }
}
