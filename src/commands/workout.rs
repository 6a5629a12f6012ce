//! Tauri commands for workout plan generation

use std::sync::Arc;
use tauri::State;

use crate::generate::GeneratorConfig;
use crate::state::AppState;
use crate::workout::{self, WorkoutPlan, WorkoutPlanRequest, WorkoutType};

/// Generate a workout for the chosen environment. Heart rate is optional and
/// comes from the manual reading on the workout screen. The session lock is
/// released before the network call.
#[tauri::command]
pub async fn generate_workout_plan(
  state: State<'_, Arc<AppState>>,
  workout_type: WorkoutType,
  heart_rate: Option<i64>,
) -> Result<WorkoutPlan, String> {
  let (profile, mood) = {
    let session = state.session();
    (session.profile().clone(), session.mood_label())
  };

  let config = GeneratorConfig::from_env().map_err(|e| e.to_string())?;
  let request = WorkoutPlanRequest {
    workout_type,
    current_mood: mood,
    user_profile: &profile,
    heart_rate,
  };

  workout::generate_workout_plan(&config, &request)
    .await
    .map_err(|e| e.to_string())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Mood;
  use crate::workout::Intensity;
  use serial_test::serial;
  use tauri::Manager;

  fn managed_app() -> tauri::App<tauri::test::MockRuntime> {
    let app = tauri::test::mock_app();
    app.manage(Arc::new(AppState::new()));
    app
  }

  #[tokio::test]
  #[serial]
  async fn test_generate_uses_session_mood_and_augments_plan() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/functions/v1/workout-generator")
      .match_body(mockito::Matcher::PartialJson(serde_json::json!({
        "workoutType": "home",
        "currentMood": "Energetic",
        "heartRate": 65
      })))
      .with_status(200)
      .with_body(
        r#"{"type": "Morning Blast", "description": "d", "exercises": [],
             "duration": 30, "caloriesBurned": 250, "weeklyFrequency": "5 days/week",
             "music": [], "tips": []}"#,
      )
      .create_async()
      .await;
    std::env::set_var("GENERATOR_API_URL", server.url());
    std::env::set_var("GENERATOR_API_KEY", "test-key");

    let app = managed_app();
    let state: State<'_, Arc<AppState>> = app.state();
    state.session().set_mood(Mood::Energetic);

    let plan = generate_workout_plan(app.state(), WorkoutType::Home, Some(65))
      .await
      .unwrap();

    assert_eq!(plan.plan_type, "Morning Blast");
    assert_eq!(plan.intensity, Some(Intensity::High));
    assert_eq!(plan.workout_type, Some(WorkoutType::Home));

    std::env::remove_var("GENERATOR_API_URL");
    std::env::remove_var("GENERATOR_API_KEY");
  }

  #[tokio::test]
  #[serial]
  async fn test_missing_config_is_reported() {
    std::env::remove_var("GENERATOR_API_URL");
    std::env::remove_var("GENERATOR_API_KEY");

    let app = managed_app();
    let err = generate_workout_plan(app.state(), WorkoutType::Gym, None)
      .await
      .unwrap_err();
    assert!(err.contains("Missing configuration"));
  }
}
