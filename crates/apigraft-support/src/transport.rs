use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;

use crate::{
  ApplicationError, Error, Headers, HttpProblem, Method, QueryString, to_query_string,
};

/// Header advertising the protocol version on every request.
pub const VERSION_HEADER: &str = "X-API-Version";

/// Header identifying the client implementation on every request.
pub const CLIENT_HEADER: &str = "X-API-Client";

/// Identity value sent in [`CLIENT_HEADER`].
pub const CLIENT_IDENT: &str = concat!("apigraft/", env!("CARGO_PKG_VERSION"));

const DEFAULT_ACCEPT: &str = "application/json";

/// Headers the transport owns. Caller-supplied values never displace them.
const RESERVED_HEADERS: [&str; 3] = ["authorization", VERSION_HEADER, CLIENT_HEADER];

/// `application/json` plus structured suffixes such as
/// `application/problem+json`.
static JSON_MEDIA_TYPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^application/([^ /]+\+)?json$").unwrap());

/// Shared request state behind a generated client: bearer token, endpoint,
/// and the protocol version advertised on every call.
#[derive(Debug, Clone)]
pub struct Transport {
  http: Client,
  token: String,
  endpoint: String,
  api_version: String,
}

impl Transport {
  #[must_use]
  pub fn new(
    token: impl Into<String>,
    endpoint: impl Into<String>,
    api_version: impl Into<String>,
  ) -> Self {
    Self::with_client(Client::new(), token, endpoint, api_version)
  }

  /// Builds a transport over an existing `reqwest::Client`, for callers that
  /// need custom pool or proxy settings.
  #[must_use]
  pub fn with_client(
    http: Client,
    token: impl Into<String>,
    endpoint: impl Into<String>,
    api_version: impl Into<String>,
  ) -> Self {
    Self {
      http,
      token: token.into(),
      endpoint: endpoint.into(),
      api_version: api_version.into(),
    }
  }

  #[must_use]
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  #[must_use]
  pub fn api_version(&self) -> &str {
    &self.api_version
  }

  /// Performs one HTTP exchange and interprets the response.
  ///
  /// Returns the decoded JSON payload, or `None` when the response declared
  /// no body (status 204, or a zero or absent content length). The response
  /// media type must be one of the caller's accepted types and must be a
  /// JSON shape; error statuses come back as [`Error::Problem`] when the
  /// body carries the [`HttpProblem`] discriminator and as
  /// [`Error::Application`] otherwise.
  pub async fn request(
    &self,
    method: Method,
    path: &str,
    query: &QueryString,
    body: Option<&Value>,
    headers: &Headers,
  ) -> Result<Option<Value>, Error> {
    let url = format!(
      "{}/{}{}",
      self.endpoint.trim_end_matches('/'),
      path.trim_start_matches('/'),
      to_query_string(query)
    );

    let mut builder = self.http.request(method, &url);
    for (name, value) in headers {
      if RESERVED_HEADERS
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
      {
        continue;
      }
      builder = builder.header(name.as_str(), value.as_str());
    }
    builder = builder
      .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
      .header(VERSION_HEADER, self.api_version.as_str())
      .header(CLIENT_HEADER, CLIENT_IDENT);
    if let Some(body) = body {
      builder = builder.body(serde_json::to_vec(body)?);
    }

    let response = builder.send().await?;
    let status = response.status();

    // Media-type parameters after ';' are not part of the comparison.
    let media_type = response
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .split(';')
      .next()
      .unwrap_or_default()
      .to_string();
    let accept = headers.get("Accept").map_or(DEFAULT_ACCEPT, String::as_str);

    if !accept.contains(&media_type) || !JSON_MEDIA_TYPE.is_match(&media_type) {
      return Err(Error::ContentType {
        content_type: media_type,
        accept: accept.to_string(),
      });
    }

    let empty =
      status == StatusCode::NO_CONTENT || response.content_length().unwrap_or(0) == 0;
    let payload = if empty {
      None
    } else {
      let bytes = response.bytes().await?;
      Some(serde_json::from_slice::<Value>(&bytes)?)
    };

    if status.as_u16() >= 400 {
      return Err(classify_error(status, payload));
    }

    Ok(payload)
  }
}

/// Splits error responses into the structured-problem and generic kinds.
fn classify_error(status: StatusCode, payload: Option<Value>) -> Error {
  let Some(value) = payload else {
    return ApplicationError::new(format!("{status} response with an empty body")).into();
  };

  if HttpProblem::matches(&value) {
    match HttpProblem::from_json(&value) {
      Ok(problem) => problem.into(),
      Err(err) => err.into(),
    }
  } else {
    ApplicationError::new(value.to_string()).into()
  }
}

#[cfg(test)]
mod tests {
  use reqwest::StatusCode;
  use serde_json::json;

  use super::{JSON_MEDIA_TYPE, classify_error};
  use crate::{Error, HttpProblem};

  #[test]
  fn json_media_type_accepts_structured_suffixes() {
    for accepted in [
      "application/json",
      "application/problem+json",
      "application/vnd.api+json",
    ] {
      assert!(JSON_MEDIA_TYPE.is_match(accepted), "{accepted}");
    }
    for rejected in [
      "",
      "text/html",
      "application/xml",
      "application/jsonp",
      "application/json+thing",
      "application/+json",
      "application/octet-stream",
    ] {
      assert!(!JSON_MEDIA_TYPE.is_match(rejected), "{rejected}");
    }
  }

  #[test]
  fn classify_recognizes_problem_documents() {
    let payload = json!({
      "$context": HttpProblem::CONTEXT,
      "title": "Bad request",
      "status": 400,
    });
    match classify_error(StatusCode::BAD_REQUEST, Some(payload)) {
      Error::Problem(problem) => {
        assert_eq!(problem.title, "Bad request");
        assert_eq!(problem.status, Some(400));
      }
      other => panic!("expected a problem, got {other:?}"),
    }
  }

  #[test]
  fn classify_serializes_unrecognized_bodies() {
    let payload = json!({ "error": "nope" });
    match classify_error(StatusCode::BAD_REQUEST, Some(payload)) {
      Error::Application(error) => assert_eq!(error.message, r#"{"error":"nope"}"#),
      other => panic!("expected an application error, got {other:?}"),
    }
  }

  #[test]
  fn classify_notes_the_status_for_empty_bodies() {
    match classify_error(StatusCode::BAD_GATEWAY, None) {
      Error::Application(error) => {
        assert!(error.message.contains("502"), "{}", error.message);
        assert!(error.message.contains("empty body"), "{}", error.message);
      }
      other => panic!("expected an application error, got {other:?}"),
    }
  }

  #[test]
  fn classify_treats_wrong_discriminators_as_application_errors() {
    let payload = json!({ "$context": "urn:somewhere-else", "title": "Nope" });
    assert!(matches!(
      classify_error(StatusCode::CONFLICT, Some(payload)),
      Error::Application(_)
    ));
  }
}
