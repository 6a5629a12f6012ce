//! Tauri commands for the two chat surfaces
//!
//! Chat failures never surface as command errors. Whatever goes wrong, the
//! transcript gets an apologetic AI message and the command resolves, so the
//! conversation view stays consistent with what the user saw.

use std::sync::Arc;
use tauri::State;

use crate::chat;
use crate::generate::GeneratorConfig;
use crate::models::{Sender, Transcript};
use crate::state::AppState;

const CHAT_FALLBACK: &str = "Sorry, something went wrong. Please try again.";

#[tauri::command]
pub async fn send_mental_health_message(
  state: State<'_, Arc<AppState>>,
  message: String,
) -> Result<String, String> {
  let mood = {
    let mut session = state.session();
    session.add_message(Transcript::MentalHealth, Sender::User, message.clone());
    session.mood_label()
  };

  let reply = match reply_for_mental_health(&message, mood).await {
    Ok(reply) => reply,
    Err(e) => {
      eprintln!("Mental health chat failed: {}", e);
      CHAT_FALLBACK.to_string()
    }
  };

  state
    .session()
    .add_message(Transcript::MentalHealth, Sender::Ai, reply.clone());
  Ok(reply)
}

#[tauri::command]
pub async fn send_meal_plan_message(
  state: State<'_, Arc<AppState>>,
  message: String,
) -> Result<String, String> {
  let profile = {
    let mut session = state.session();
    session.add_message(Transcript::MealPlan, Sender::User, message.clone());
    session.profile().clone()
  };

  let reply = match reply_for_meal_plan(&message, &profile).await {
    Ok(reply) => reply,
    Err(e) => {
      eprintln!("Meal plan chat failed: {}", e);
      CHAT_FALLBACK.to_string()
    }
  };

  state
    .session()
    .add_message(Transcript::MealPlan, Sender::Ai, reply.clone());
  Ok(reply)
}

async fn reply_for_mental_health(
  message: &str,
  mood: &str,
) -> Result<String, crate::generate::GenerateError> {
  let config = GeneratorConfig::from_env()?;
  chat::send_mental_health_message(&config, message, mood).await
}

async fn reply_for_meal_plan(
  message: &str,
  profile: &crate::models::HealthProfile,
) -> Result<String, crate::generate::GenerateError> {
  let config = GeneratorConfig::from_env()?;
  chat::send_meal_plan_message(&config, message, profile).await
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
