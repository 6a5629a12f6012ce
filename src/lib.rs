pub mod chat;
pub mod commands;
pub mod gamification;
pub mod generate;
pub mod generator;
pub mod health;
pub mod llm;
pub mod mealplan;
pub mod models;
pub mod session;
pub mod state;
pub mod units;
pub mod workout;

#[cfg(test)]
pub mod test_utils;

use state::AppState;
use std::sync::Arc;
use tauri::Manager;

/// All registered commands, for the shell to pass to `Builder::invoke_handler`.
pub fn invoke_handler<R: tauri::Runtime>() -> impl Fn(tauri::ipc::Invoke<R>) -> bool {
  tauri::generate_handler![
    commands::set_mood,
    commands::get_mood,
    commands::get_current_meal,
    commands::get_meal_history,
    commands::get_badges,
    commands::get_gamification_summary,
    commands::get_chat_messages,
    commands::open_mental_health_chat,
    commands::open_meal_plan_chat,
    commands::get_meal_planner_form,
    // Profile commands
    commands::profile::get_health_profile,
    commands::profile::update_health_profile,
    commands::profile::get_bmi_classification,
    commands::profile::get_weight_loss_target,
    // Generation commands
    commands::mealplan::generate_meal_plan,
    commands::workout::generate_workout_plan,
    commands::chat::send_mental_health_message,
    commands::chat::send_meal_plan_message,
  ]
}

/// Attach a fresh session to the app. Called from the shell's setup hook.
pub fn manage_state<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();
  app.manage(Arc::new(AppState::new()));
}
