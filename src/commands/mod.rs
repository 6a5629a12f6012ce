pub mod chat;
pub mod mealplan;
pub mod profile;
pub mod workout;

use serde::Serialize;
use std::sync::Arc;
use tauri::State;

use crate::models::{Badge, Meal, Message, Mood, Transcript};
use crate::state::AppState;

/// Opening AI message shown when the wellness chat is first opened.
pub const MENTAL_HEALTH_GREETING: &str =
  "Hey there! I'm your wellness buddy. How can I support you today?";

/// Opening AI message shown when the meal-plan chat is first opened.
pub const MEAL_PLAN_GREETING: &str =
  "Hello! I'm your meal planning assistant. Ask me anything about nutrition, meal prep, or dietary advice!";

#[tauri::command]
pub async fn set_mood(state: State<'_, Arc<AppState>>, mood: Mood) -> Result<(), String> {
  state.session().set_mood(mood);
  Ok(())
}

#[tauri::command]
pub async fn get_mood(state: State<'_, Arc<AppState>>) -> Result<Option<Mood>, String> {
  Ok(state.session().mood())
}

#[tauri::command]
pub async fn get_current_meal(state: State<'_, Arc<AppState>>) -> Result<Option<Meal>, String> {
  Ok(state.session().current_meal().cloned())
}

#[tauri::command]
pub async fn get_meal_history(state: State<'_, Arc<AppState>>) -> Result<Vec<Meal>, String> {
  Ok(state.session().meal_history().to_vec())
}

#[tauri::command]
pub async fn get_badges(state: State<'_, Arc<AppState>>) -> Result<Vec<Badge>, String> {
  Ok(state.session().badges().to_vec())
}

/// Totals for the achievements screen, always derived from the badge list.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationSummary {
  pub total_xp: i64,
  pub level: i64,
}

#[tauri::command]
pub async fn get_gamification_summary(
  state: State<'_, Arc<AppState>>,
) -> Result<GamificationSummary, String> {
  let session = state.session();
  Ok(GamificationSummary {
    total_xp: session.total_xp(),
    level: session.level(),
  })
}

#[tauri::command]
pub async fn get_chat_messages(
  state: State<'_, Arc<AppState>>,
  transcript: Transcript,
) -> Result<Vec<Message>, String> {
  Ok(state.session().messages(transcript).to_vec())
}

/// Seed the greeting if the transcript is empty, then return it.
#[tauri::command]
pub async fn open_mental_health_chat(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<Message>, String> {
  let mut session = state.session();
  session.seed_transcript(Transcript::MentalHealth, MENTAL_HEALTH_GREETING);
  Ok(session.messages(Transcript::MentalHealth).to_vec())
}

#[tauri::command]
pub async fn open_meal_plan_chat(state: State<'_, Arc<AppState>>) -> Result<Vec<Message>, String> {
  let mut session = state.session();
  session.seed_transcript(Transcript::MealPlan, MEAL_PLAN_GREETING);
  Ok(session.messages(Transcript::MealPlan).to_vec())
}

/// Remembered meal-planner form values, camelCase for the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlannerForm {
  pub available_ingredients: String,
  pub preferred_cuisine: String,
}

#[tauri::command]
pub async fn get_meal_planner_form(
  state: State<'_, Arc<AppState>>,
) -> Result<MealPlannerForm, String> {
  let session = state.session();
  Ok(MealPlannerForm {
    available_ingredients: session.available_ingredients().to_string(),
    preferred_cuisine: session.preferred_cuisine().to_string(),
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
