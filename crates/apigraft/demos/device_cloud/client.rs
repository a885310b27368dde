//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Device Cloud REST API client
//! Source: fixtures/device_cloud.json
//! Version: 1.4.2
//! Generated by `apigraft`

use apigraft_support::{Error, Headers, Method, QueryString, Transport};
use serde_json::Value;
use apigraft_support::models::Tenant;
use super::types::DeviceState;
use super::types::StateDigest;
use super::types::GatewayList;
use super::types::GatewayRegistrationResult;
#[allow(unused_imports)]
use apigraft_support::{ApplicationError, HttpProblem};
/// API client for Device Cloud REST API.
///
/// Generated for version 1.4.2 of the API description.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}
impl Client {
    /// Protocol version advertised to the service on every request.
    pub const API_VERSION: &'static str = "1.4.2";
    /// Creates a client for the default endpoint `https://api.devicecloud.example.com/v1/`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, "https://api.devicecloud.example.com/v1/")
    }
    /// Creates a client against a custom endpoint.
    #[must_use]
    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(token, endpoint, Self::API_VERSION),
        }
    }
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
    /// Fetch a tenant
    ///
    /// `GET /tenants/{tenantId}`
    ///
    /// # Responses
    /// - 200 application/json: `Tenant` (The requested tenant)
    /// - 404 application/problem+json: `HttpProblem` (Tenant not found)
    ///
    /// # Parameters
    /// - `tenant_id` (string, required, path)
    ///
    /// # Errors
    /// - [`Error::ContentType`] when the response media type is not accepted
    /// - [`Error::Problem`] when an error status carries a problem document
    /// - [`Error::Application`] for any other error status
    pub async fn get_tenant(&self, tenant_id: &str) -> Result<Tenant, Error> {
        let path = String::from("tenants/{tenantId}").replace("{tenantId}", tenant_id);
        let query = QueryString::new();
        let headers = Headers::from([
            (
                String::from("Accept"),
                String::from("application/json, application/problem+json"),
            ),
        ]);
        let value = self.request(Method::GET, &path, &query, None, &headers).await?;
        Ok(serde_json::from_value(value.unwrap_or_default())?)
    }
    /// Fetch the reported and desired state of a device
    ///
    /// `GET /tenants/{tenantId}/devices/{deviceId}/state`
    ///
    /// # Responses
    /// - 200 application/json: `DeviceState` (Full state document)
    /// - 202 application/json: `StateDigest` (State digest while a sync is in flight)
    /// - 404 application/problem+json: `HttpProblem` (Unknown device)
    ///
    /// # Parameters
    /// - `tenant_id` (string, required, path)
    /// - `device_id` (string, required, path)
    /// - `fields` (string, optional, query)
    ///
    /// # Errors
    /// - [`Error::ContentType`] when the response media type is not accepted
    /// - [`Error::Problem`] when an error status carries a problem document
    /// - [`Error::Application`] for any other error status
    pub async fn fetch_device_state(
        &self,
        tenant_id: &str,
        device_id: &str,
        fields: Option<&str>,
    ) -> Result<FetchDeviceStateResult, Error> {
        let path = String::from("tenants/{tenantId}/devices/{deviceId}/state")
            .replace("{tenantId}", tenant_id)
            .replace("{deviceId}", device_id);
        let query = QueryString::from([
            (String::from("fields"), fields.map(String::from)),
        ]);
        let headers = Headers::from([
            (
                String::from("Accept"),
                String::from("application/json, application/problem+json"),
            ),
        ]);
        let value = self.request(Method::GET, &path, &query, None, &headers).await?;
        Ok(serde_json::from_value(value.unwrap_or_default())?)
    }
    /// List gateways registered to a tenant
    ///
    /// `GET /tenants/{tenantId}/gateways`
    ///
    /// # Responses
    /// - 200 application/json: `GatewayList` (Matching gateways)
    /// - 400 application/problem+json: `HttpProblem` (Bad request)
    ///
    /// # Parameters
    /// - `tenant_id` (string, required, path)
    /// - `include_disabled` (string, optional, query)
    ///
    /// # Errors
    /// - [`Error::ContentType`] when the response media type is not accepted
    /// - [`Error::Problem`] when an error status carries a problem document
    /// - [`Error::Application`] for any other error status
    pub async fn list_gateways(
        &self,
        tenant_id: &str,
        include_disabled: Option<&str>,
    ) -> Result<GatewayList, Error> {
        let path = String::from("tenants/{tenantId}/gateways")
            .replace("{tenantId}", tenant_id);
        let query = QueryString::from([
            (String::from("includeDisabled"), include_disabled.map(String::from)),
        ]);
        let headers = Headers::from([
            (
                String::from("Accept"),
                String::from("application/json, application/problem+json"),
            ),
        ]);
        let value = self.request(Method::GET, &path, &query, None, &headers).await?;
        Ok(serde_json::from_value(value.unwrap_or_default())?)
    }
    /// Register a gateway
    ///
    /// Creates a gateway record and returns its certificate bundle.
    ///
    /// `POST /tenants/{tenantId}/gateways`
    ///
    /// # Responses
    /// - 201 application/json: `GatewayRegistrationResult` (Gateway registered)
    /// - 400 application/problem+json: `HttpProblem` (Bad request)
    /// - 403 application/problem+json: `HttpProblem` (Forbidden)
    ///
    /// # Parameters
    /// - `tenant_id` (string, required, path)
    ///
    /// # Errors
    /// - [`Error::ContentType`] when the response media type is not accepted
    /// - [`Error::Problem`] when an error status carries a problem document
    /// - [`Error::Application`] for any other error status
    pub async fn register_gateway(
        &self,
        tenant_id: &str,
    ) -> Result<GatewayRegistrationResult, Error> {
        let path = String::from("tenants/{tenantId}/gateways")
            .replace("{tenantId}", tenant_id);
        let query = QueryString::new();
        let headers = Headers::from([
            (
                String::from("Accept"),
                String::from("application/json, application/problem+json"),
            ),
        ]);
        let value = self.request(Method::POST, &path, &query, None, &headers).await?;
        Ok(serde_json::from_value(value.unwrap_or_default())?)
    }
    /// Remove a gateway
    ///
    /// `DELETE /tenants/{tenantId}/gateways/{gatewayId}`
    ///
    /// # Responses
    /// - 400 application/problem+json: `HttpProblem` (Bad request)
    ///
    /// # Parameters
    /// - `tenant_id` (string, required, path)
    /// - `gateway_id` (string, required, path)
    ///
    /// # Errors
    /// - [`Error::ContentType`] when the response media type is not accepted
    /// - [`Error::Problem`] when an error status carries a problem document
    /// - [`Error::Application`] for any other error status
    pub async fn remove_gateway(
        &self,
        tenant_id: &str,
        gateway_id: &str,
    ) -> Result<(), Error> {
        let path = String::from("tenants/{tenantId}/gateways/{gatewayId}")
            .replace("{tenantId}", tenant_id)
            .replace("{gatewayId}", gateway_id);
        let query = QueryString::new();
        let headers = Headers::from([
            (String::from("Accept"), String::from("application/problem+json")),
        ]);
        self.request(Method::DELETE, &path, &query, None, &headers).await?;
        Ok(())
    }
}
/// Success payloads produced by `fetch_device_state`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum FetchDeviceStateResult {
    DeviceState(DeviceState),
    StateDigest(StateDigest),
}
