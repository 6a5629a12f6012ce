//! Shared plumbing for the generation endpoints
//!
//! Both plan generators and both chat clients POST JSON to the same hosted
//! backend: `<base_url>/functions/v1/<function>` with a bearer token the core
//! treats as opaque configuration. This module owns that transport plus the
//! failure taxonomy. No failure is retried here: every error is terminal for
//! the request and the user re-invokes generation.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use url::Url;

const FUNCTIONS_PATH: &str = "functions/v1";

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  pub base_url: String,
  pub api_key: String,
}

impl GeneratorConfig {
  pub fn from_env() -> Result<Self, GenerateError> {
    dotenvy::dotenv().ok();
    Ok(Self {
      base_url: env::var("GENERATOR_API_URL")
        .map_err(|_| GenerateError::MissingConfig("GENERATOR_API_URL".into()))?,
      api_key: env::var("GENERATOR_API_KEY")
        .map_err(|_| GenerateError::MissingConfig("GENERATOR_API_KEY".into()))?,
    })
  }

  /// Full URL for one generation function.
  pub fn endpoint(&self, function: &str) -> Result<Url, GenerateError> {
    let base = Url::parse(&self.base_url)
      .map_err(|e| GenerateError::MissingConfig(format!("GENERATOR_API_URL: {}", e)))?;
    base
      .join(&format!("{}/{}", FUNCTIONS_PATH, function))
      .map_err(|e| GenerateError::MissingConfig(format!("GENERATOR_API_URL: {}", e)))
  }
}

/// ---------------------------------------------------------------------------
/// Error Taxonomy
/// ---------------------------------------------------------------------------

/// Failure kinds for a generation request. `Generation` and `Transport` read
/// the same to the user; `Contract` is kept separate so a malformed body shows
/// up as such in diagnostics instead of masquerading as a network problem.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("{0}")]
  Generation(String),

  #[error("Malformed generator response: {0}")]
  Contract(String),
}

impl Serialize for GenerateError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// Error body the backend returns alongside a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  error: String,
}

/// ---------------------------------------------------------------------------
/// Transport
/// ---------------------------------------------------------------------------

/// POST a request body to one generation function and return the raw response
/// body. Non-2xx statuses are classified here: a parseable `{error}` payload
/// is surfaced verbatim, anything else becomes a generic failure with the
/// status attached.
pub(crate) async fn post_generation<T: Serialize>(
  config: &GeneratorConfig,
  function: &str,
  body: &T,
) -> Result<String, GenerateError> {
  let url = config.endpoint(function)?;
  let client = Client::new();

  let response = client
    .post(url)
    .bearer_auth(&config.api_key)
    .header("content-type", "application/json")
    .json(body)
    .send()
    .await?;

  let status = response.status();
  let text = response.text().await?;

  if !status.is_success() {
    return Err(classify_failure(status, &text));
  }

  Ok(text)
}

fn classify_failure(status: StatusCode, body: &str) -> GenerateError {
  if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
    return GenerateError::Generation(parsed.error);
  }
  GenerateError::Generation(format!("HTTP {}: request failed", status))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
