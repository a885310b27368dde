use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// Failures surfaced by [`Transport::request`](crate::Transport::request).
///
/// The first three variants classify the response itself; the last two carry
/// faults from the HTTP and JSON layers unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The response media type failed the accept gate or is not a JSON shape.
  #[error("response content-type {content_type:?} does not satisfy accepted media types {accept:?}")]
  ContentType { content_type: String, accept: String },

  /// An error status carried the canonical structured problem payload.
  #[error(transparent)]
  Problem(#[from] HttpProblem),

  /// An error status carried any other payload, or none at all.
  #[error(transparent)]
  Application(#[from] ApplicationError),

  /// The underlying HTTP exchange failed before a response could be
  /// classified.
  #[error(transparent)]
  Transport(#[from] reqwest::Error),

  /// A payload could not be serialized or decoded as JSON.
  #[error(transparent)]
  Decode(#[from] serde_json::Error),
}

/// Structured problem document shared by well-behaved error responses,
/// recognized on the wire by its `$context` discriminator.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpProblem {
  #[serde(rename = "$context")]
  pub context: String,
  pub title: String,
  pub status: Option<u16>,
  pub detail: Option<String>,
  #[serde(rename = "type")]
  pub type_uri: Option<String>,
}

impl HttpProblem {
  /// Discriminator value that marks a JSON payload as a problem document.
  pub const CONTEXT: &'static str = "https://github.com/eklipse2k8/apigraft#HttpProblem";

  #[must_use]
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      context: Self::CONTEXT.to_string(),
      title: title.into(),
      status: None,
      detail: None,
      type_uri: None,
    }
  }

  #[must_use]
  pub fn with_status(mut self, status: u16) -> Self {
    self.status = Some(status);
    self
  }

  #[must_use]
  pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
    self.detail = Some(detail.into());
    self
  }

  /// Whether `value` carries this library's discriminator.
  #[must_use]
  pub fn matches(value: &Value) -> bool {
    value.get("$context").and_then(Value::as_str) == Some(Self::CONTEXT)
  }

  /// Reconstructs a problem from an already-decoded JSON payload.
  pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
    serde_json::from_value(value.clone())
  }
}

impl fmt::Display for HttpProblem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.title)?;
    if let Some(status) = self.status {
      write!(f, " ({status})")?;
    }
    if let Some(detail) = &self.detail {
      write!(f, ": {detail}")?;
    }
    Ok(())
  }
}

impl std::error::Error for HttpProblem {}

/// Error-status response that did not match the problem shape. The message
/// holds the serialized response body, or a note about the status when the
/// body was empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApplicationError {
  pub message: String,
}

impl ApplicationError {
  #[must_use]
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
