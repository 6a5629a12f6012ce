//! Chat clients for the two conversational surfaces
//!
//! The mental-health companion and the meal-planning assistant share one wire
//! shape: POST a small JSON body, get back `{"response": "..."}`. Context
//! differs per surface (current mood vs. health profile). Transcript handling
//! lives in the command layer; these functions are pure request/response.

use serde::{Deserialize, Serialize};

use crate::generate::{post_generation, GenerateError, GeneratorConfig};
use crate::models::HealthProfile;

const MENTAL_HEALTH_FUNCTION: &str = "mental-health-chat";
const MEAL_PLAN_CHAT_FUNCTION: &str = "meal-plan-chat";

/// ---------------------------------------------------------------------------
/// Request / Response Contract
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
struct MentalHealthRequest<'a> {
  message: &'a str,
  mood: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MealPlanChatRequest<'a> {
  message: &'a str,
  user_profile: &'a HealthProfile,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
  response: String,
}

/// ---------------------------------------------------------------------------
/// Clients
/// ---------------------------------------------------------------------------

/// One supportive-companion exchange. `mood` is the session mood label, or an
/// empty string when the user never picked one.
pub async fn send_mental_health_message(
  config: &GeneratorConfig,
  message: &str,
  mood: &str,
) -> Result<String, GenerateError> {
  let request = MentalHealthRequest { message, mood };
  let body = post_generation(config, MENTAL_HEALTH_FUNCTION, &request).await?;
  parse_reply(&body)
}

/// One nutrition-assistant exchange, grounded in the current profile.
pub async fn send_meal_plan_message(
  config: &GeneratorConfig,
  message: &str,
  profile: &HealthProfile,
) -> Result<String, GenerateError> {
  let request = MealPlanChatRequest {
    message,
    user_profile: profile,
  };
  let body = post_generation(config, MEAL_PLAN_CHAT_FUNCTION, &request).await?;
  parse_reply(&body)
}

fn parse_reply(body: &str) -> Result<String, GenerateError> {
  let reply: ChatReply = serde_json::from_str(body).map_err(|e| {
    eprintln!("Chat response missing the reply field: {}", e);
    GenerateError::Contract(e.to_string())
  })?;
  Ok(reply.response)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{mock_generator_config, mock_profile};

  #[tokio::test]
  async fn test_mental_health_exchange() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/functions/v1/mental-health-chat")
      .match_header("authorization", "Bearer test-key")
      .match_body(mockito::Matcher::Json(serde_json::json!({
        "message": "I had a rough day",
        "mood": "Stressed"
      })))
      .with_status(200)
      .with_body(r#"{"response": "That sounds hard. Want to talk about it?"}"#)
      .create_async()
      .await;

    let config = mock_generator_config(&server.url());
    let reply = send_mental_health_message(&config, "I had a rough day", "Stressed")
      .await
      .unwrap();

    assert_eq!(reply, "That sounds hard. Want to talk about it?");
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_meal_plan_chat_sends_profile_context() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/functions/v1/meal-plan-chat")
      .match_body(mockito::Matcher::PartialJson(serde_json::json!({
        "message": "high protein breakfast ideas?"
      })))
      .with_status(200)
      .with_body(r#"{"response": "Try a three-egg omelette with spinach."}"#)
      .create_async()
      .await;

    let config = mock_generator_config(&server.url());
    let profile = mock_profile();
    let reply = send_meal_plan_message(&config, "high protein breakfast ideas?", &profile)
      .await
      .unwrap();

    assert_eq!(reply, "Try a three-egg omelette with spinach.");
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_missing_reply_field_is_a_contract_violation() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/functions/v1/mental-health-chat")
      .with_status(200)
      .with_body(r#"{"text": "wrong field"}"#)
      .create_async()
      .await;

    let config = mock_generator_config(&server.url());
    let err = send_mental_health_message(&config, "hello", "").await.unwrap_err();
    assert!(matches!(err, GenerateError::Contract(_)));
  }

  #[tokio::test]
  async fn test_backend_error_surfaced_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/functions/v1/meal-plan-chat")
      .with_status(500)
      .with_body(r#"{"error": "Gemini API request failed"}"#)
      .create_async()
      .await;

    let config = mock_generator_config(&server.url());
    let profile = mock_profile();
    let err = send_meal_plan_message(&config, "hello", &profile).await.unwrap_err();
    assert_eq!(err.to_string(), "Gemini API request failed");
  }
}
