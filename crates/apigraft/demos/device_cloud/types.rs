//! Local response models for the device cloud description. Only `Tenant`
//! comes from the shared catalog; everything else lives here.

use apigraft_support::models::Gateway;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayList {
  pub items: Vec<Gateway>,
  pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRegistrationResult {
  pub gateway_id: String,
  pub certificate_pem: String,
}

/// Full state document. `reported` and `desired` must stay required so
/// untagged decoding never reads a digest as a full document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
  pub device_id: String,
  pub reported: Value,
  pub desired: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDigest {
  pub device_id: String,
  pub checksum: String,
}
