//! Tauri commands for meal plan generation

use serde::Serialize;
use std::sync::Arc;
use tauri::State;

use crate::generate::GeneratorConfig;
use crate::mealplan::{self, MealPlanOutcome, MealPlanRequest};
use crate::models::Meal;
use crate::state::AppState;

/// Command-level outcome, serialized in the wire shape the frontend branches
/// on: `{meal}` or `{missingIngredients}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MealPlanGeneration {
  Meal {
    meal: Meal,
  },
  MissingIngredients {
    #[serde(rename = "missingIngredients")]
    missing_ingredients: Vec<String>,
  },
}

/// Generate a meal from the submitted form. Form values are remembered
/// whatever the outcome; the success transaction (current meal, history,
/// badge) only runs when a meal actually comes back. The session lock is
/// never held across the network call.
#[tauri::command]
pub async fn generate_meal_plan(
  state: State<'_, Arc<AppState>>,
  ingredients: String,
  cuisine: String,
) -> Result<MealPlanGeneration, String> {
  let (profile, mood) = {
    let mut session = state.session();
    session.set_available_ingredients(ingredients.clone());
    session.set_preferred_cuisine(cuisine.clone());
    (session.profile().clone(), session.mood_label())
  };

  let config = GeneratorConfig::from_env().map_err(|e| e.to_string())?;
  let request = MealPlanRequest {
    ingredients: &ingredients,
    user_profile: &profile,
    mood,
    cuisine: &cuisine,
  };

  let outcome = mealplan::generate_meal_plan(&config, &request)
    .await
    .map_err(|e| e.to_string())?;

  match outcome {
    MealPlanOutcome::Meal(meal) => {
      state.session().record_generated_meal(meal.clone());
      Ok(MealPlanGeneration::Meal { meal })
    }
    MealPlanOutcome::MissingIngredients(missing_ingredients) => {
      Ok(MealPlanGeneration::MissingIngredients { missing_ingredients })
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
