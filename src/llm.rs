//! LLM integration for meal, workout, and chat generation
//!
//! This module handles communication with the Google Generative Language API
//! used by the generation service. Prompt construction lives in `generator`;
//! this module only knows how to send one prompt and get one text reply back.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const GEMINI_API_URL: &str =
  "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Serialize)]
pub enum LlmError {
  #[error("API key not configured")]
  MissingApiKey,

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

/// ---------------------------------------------------------------------------
/// Gemini API Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
  contents: Vec<Content<'a>>,
  generation_config: &'a GenerationOptions,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
  parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
  text: &'a str,
}

/// Sampling knobs for one generation call. Each generation surface carries its
/// own tuned values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
  pub temperature: f64,
  pub max_output_tokens: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub top_p: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub top_k: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub response_mime_type: Option<String>,
}

impl GenerationOptions {
  pub fn text(temperature: f64, max_output_tokens: u32) -> Self {
    Self {
      temperature,
      max_output_tokens,
      top_p: None,
      top_k: None,
      response_mime_type: None,
    }
  }

  /// Structured output: asks the model for a raw JSON body.
  pub fn json(temperature: f64, max_output_tokens: u32) -> Self {
    Self {
      response_mime_type: Some("application/json".to_string()),
      ..Self::text(temperature, max_output_tokens)
    }
  }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
  candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
  content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
  parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
  text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
  error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
  message: String,
}

/// ---------------------------------------------------------------------------
/// Gemini Client
/// ---------------------------------------------------------------------------

pub struct GeminiClient {
  client: Client,
  api_key: String,
  endpoint: String,
}

impl GeminiClient {
  /// Create a new Gemini client, loading the API key from the environment
  pub fn from_env() -> Result<Self, LlmError> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GOOGLE_AI_KEY").map_err(|_| LlmError::MissingApiKey)?;

    Ok(Self {
      client: Client::new(),
      api_key,
      endpoint: GEMINI_API_URL.to_string(),
    })
  }

  /// Client pointed at a non-default endpoint (test servers).
  pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      api_key: api_key.into(),
      endpoint: endpoint.into(),
    }
  }

  /// Send one prompt and return the first candidate's text
  pub async fn complete(
    &self,
    prompt: &str,
    options: &GenerationOptions,
  ) -> Result<String, LlmError> {
    let request = GeminiRequest {
      contents: vec![Content {
        parts: vec![Part { text: prompt }],
      }],
      generation_config: options,
    };

    let response = self
      .client
      .post(&self.endpoint)
      .query(&[("key", &self.api_key)])
      .header("content-type", "application/json")
      .json(&request)
      .send()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    if !status.is_success() {
      if let Ok(error_resp) = serde_json::from_str::<GeminiErrorResponse>(&body) {
        return Err(LlmError::Api(error_resp.error.message));
      }
      return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
    }

    let gemini_response: GeminiResponse =
      serde_json::from_str(&body).map_err(|e| LlmError::Parse(e.to_string()))?;

    gemini_response
      .candidates
      .into_iter()
      .next()
      .and_then(|c| c.content.parts.into_iter().next())
      .and_then(|p| p.text)
      .ok_or_else(|| LlmError::Parse("No text content in response".to_string()))
  }
}

/// ---------------------------------------------------------------------------
/// Response Post-Processing
/// ---------------------------------------------------------------------------

/// Strip markdown code fences the model sometimes wraps JSON in, even when
/// asked for a raw JSON body.
pub fn strip_code_fences(text: &str) -> String {
  let trimmed = text.trim();

  if let Some(rest) = trimmed.strip_prefix("```json") {
    if let Some(inner) = rest.strip_suffix("```") {
      return inner.trim().to_string();
    }
  }
  if let Some(rest) = trimmed.strip_prefix("```") {
    if let Some(inner) = rest.strip_suffix("```") {
      return inner.trim().to_string();
    }
  }

  trimmed.to_string()
}

/// Cap a chat reply at `max` sentences, counting '.', '!', and '?' as
/// terminators. Keeps the original punctuation; replies under the cap pass
/// through unchanged.
pub fn truncate_sentences(text: &str, max: usize) -> String {
  let mut count = 0;
  for (i, c) in text.char_indices() {
    if matches!(c, '.' | '!' | '?') {
      count += 1;
      if count == max {
        return text[..=i].trim().to_string();
      }
    }
  }
  text.trim().to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
