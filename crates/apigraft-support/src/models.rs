//! Fixed catalog of schema types shared across generated clients.
//!
//! When an operation's response references one of [`SHARED_MODELS`] the
//! generator imports it from here instead of the host crate's local types
//! module, so the common shapes have a single definition.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Schema names resolved against this module instead of generated code.
pub const SHARED_MODELS: [&str; 3] = ["Device", "Gateway", "Tenant"];

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
  pub id: String,
  pub name: Option<String>,
  pub plan: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
  pub id: String,
  pub tenant_id: String,
  pub name: Option<String>,
  pub connected: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
  pub id: String,
  pub gateway_id: Option<String>,
  pub firmware_version: Option<String>,
}
