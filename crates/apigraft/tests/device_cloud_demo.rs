//! Exercises the checked-in device cloud client in `demos/` against an
//! in-process mock service, covering path substitution, shared and local
//! model decoding, union payloads, and problem classification.

#[path = "../demos/device_cloud/mod.rs"]
mod device_cloud;

use apigraft_support::{Error, HttpProblem};
use axum::{
  Json, Router,
  extract::Path,
  http::{StatusCode, header},
  response::IntoResponse,
  routing::{delete, get, post},
};
use serde_json::json;

use device_cloud::client::{Client, FetchDeviceStateResult};

/// Binds a router on an ephemeral port and returns a client pointed at it.
async fn client_for(router: Router) -> Client {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind");
  let addr = listener.local_addr().expect("local addr");
  tokio::spawn(async move {
    axum::serve(listener, router).await.expect("serve");
  });
  Client::with_endpoint("demo-token", format!("http://{addr}"))
}

#[tokio::test]
async fn get_tenant_decodes_the_shared_model() {
  async fn handler(Path(tenant_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "id": tenant_id, "name": "Acme", "plan": "pro" }))
  }
  let client = client_for(Router::new().route("/tenants/{tenantId}", get(handler))).await;

  let tenant = client.get_tenant("t-42").await.expect("tenant");
  assert_eq!(tenant.id, "t-42");
  assert_eq!(tenant.name.as_deref(), Some("Acme"));
  assert_eq!(tenant.plan.as_deref(), Some("pro"));
}

#[tokio::test]
async fn register_gateway_substitutes_the_path_placeholder() {
  async fn handler(Path(tenant_id): Path<String>) -> impl IntoResponse {
    (
      StatusCode::CREATED,
      Json(json!({
        "gatewayId": format!("gw-{tenant_id}"),
        "certificatePem": "-----BEGIN CERTIFICATE-----",
      })),
    )
  }
  let router = Router::new().route("/tenants/{tenantId}/gateways", post(handler));
  let client = client_for(router).await;

  let registered = client.register_gateway("abc").await.expect("registration");
  assert_eq!(registered.gateway_id, "gw-abc");
  assert_eq!(registered.certificate_pem, "-----BEGIN CERTIFICATE-----");
}

#[tokio::test]
async fn fetch_device_state_decodes_the_full_document() {
  async fn handler(Path((_, device_id)): Path<(String, String)>) -> impl IntoResponse {
    Json(json!({
      "deviceId": device_id,
      "reported": { "temperature": 21.5 },
      "desired": { "temperature": 20.0 },
    }))
  }
  let router = Router::new()
    .route("/tenants/{tenantId}/devices/{deviceId}/state", get(handler));
  let client = client_for(router).await;

  match client.fetch_device_state("t-1", "d-9", None).await.expect("state") {
    FetchDeviceStateResult::DeviceState(state) => {
      assert_eq!(state.device_id, "d-9");
      assert_eq!(state.reported["temperature"], 21.5);
      assert_eq!(state.desired["temperature"], 20.0);
    }
    FetchDeviceStateResult::StateDigest(digest) => {
      panic!("expected a full document, got digest {digest:?}")
    }
  }
}

#[tokio::test]
async fn fetch_device_state_decodes_the_digest_variant() {
  async fn handler(Path((_, device_id)): Path<(String, String)>) -> impl IntoResponse {
    (
      StatusCode::ACCEPTED,
      Json(json!({ "deviceId": device_id, "checksum": "abc123" })),
    )
  }
  let router = Router::new()
    .route("/tenants/{tenantId}/devices/{deviceId}/state", get(handler));
  let client = client_for(router).await;

  match client
    .fetch_device_state("t-1", "d-sync", Some("checksum"))
    .await
    .expect("digest")
  {
    FetchDeviceStateResult::StateDigest(digest) => {
      assert_eq!(digest.device_id, "d-sync");
      assert_eq!(digest.checksum, "abc123");
    }
    FetchDeviceStateResult::DeviceState(state) => {
      panic!("expected a digest, got full document {state:?}")
    }
  }
}

#[tokio::test]
async fn list_gateways_decodes_nested_shared_models() {
  async fn handler(Path(tenant_id): Path<String>) -> impl IntoResponse {
    Json(json!({
      "items": [
        { "id": "gw-1", "tenantId": tenant_id, "name": "east", "connected": true },
        { "id": "gw-2", "tenantId": tenant_id },
      ],
      "total": 2,
    }))
  }
  let router = Router::new().route("/tenants/{tenantId}/gateways", get(handler));
  let client = client_for(router).await;

  let gateways = client.list_gateways("t-7", None).await.expect("gateways");
  assert_eq!(gateways.total, 2);
  assert_eq!(gateways.items[0].id, "gw-1");
  assert_eq!(gateways.items[0].connected, Some(true));
  assert_eq!(gateways.items[1].connected, None);
}

#[tokio::test]
async fn remove_gateway_discards_the_body() {
  // The operation only declares problem responses, so the client accepts
  // nothing but `application/problem+json`.
  async fn handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/problem+json")], "{}")
  }
  let router =
    Router::new().route("/tenants/{tenantId}/gateways/{gatewayId}", delete(handler));
  let client = client_for(router).await;

  client.remove_gateway("t-1", "gw-1").await.expect("removal");
}

#[tokio::test]
async fn problem_responses_surface_as_structured_errors() {
  async fn handler() -> impl IntoResponse {
    (
      StatusCode::FORBIDDEN,
      Json(HttpProblem::new("Forbidden").with_status(403).with_detail(
        "The token does not allow gateway registration.",
      )),
    )
  }
  let router = Router::new().route("/tenants/{tenantId}/gateways", post(handler));
  let client = client_for(router).await;

  match client.register_gateway("t-1").await {
    Err(Error::Problem(problem)) => {
      assert_eq!(problem.title, "Forbidden");
      assert_eq!(problem.status, Some(403));
      assert_eq!(
        problem.detail.as_deref(),
        Some("The token does not allow gateway registration.")
      );
    }
    other => panic!("expected a problem, got {other:?}"),
  }
}

#[tokio::test]
async fn plain_error_bodies_surface_as_application_errors() {
  async fn handler() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad tenant" })))
  }
  let router = Router::new().route("/tenants/{tenantId}", get(handler));
  let client = client_for(router).await;

  match client.get_tenant("nope").await {
    Err(Error::Application(error)) => {
      assert!(error.message.contains("bad tenant"), "{}", error.message);
    }
    other => panic!("expected an application error, got {other:?}"),
  }
}
