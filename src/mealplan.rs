//! Meal plan generation client
//!
//! Sends the available ingredients plus profile context to the hosted
//! generator and classifies the reply. The backend answers with exactly one of
//! three shapes: a meal, a list of missing ingredients (the soft decline of
//! the negotiation loop), or an error string. The three cases are mutually
//! exclusive by construction here, not presence-checked fields.

use serde::{Deserialize, Serialize};

use crate::generate::{post_generation, GenerateError, GeneratorConfig};
use crate::models::{HealthProfile, Meal};

const MEAL_PLAN_FUNCTION: &str = "meal-plan-generator";

/// ---------------------------------------------------------------------------
/// Request / Response Contract
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest<'a> {
  pub ingredients: &'a str,
  pub user_profile: &'a HealthProfile,
  pub mood: &'a str,
  pub cuisine: &'a str,
}

/// Wire shape of a generator reply. Shared with the service half, which
/// produces the same three variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealPlanResponse {
  MissingIngredients {
    #[serde(rename = "missingIngredients")]
    missing_ingredients: Vec<String>,
  },
  Meal {
    meal: Meal,
  },
  Error {
    error: String,
  },
}

/// What a successful round trip produced. A missing-ingredient reply is not an
/// error: generation worked, it just declined to cook.
#[derive(Debug, Clone)]
pub enum MealPlanOutcome {
  Meal(Meal),
  MissingIngredients(Vec<String>),
}

/// ---------------------------------------------------------------------------
/// Client
/// ---------------------------------------------------------------------------

/// One meal generation round trip. Callers own all state effects: on
/// `Meal` they run the record transaction, on `MissingIngredients` they only
/// surface the list, and on error nothing is mutated.
pub async fn generate_meal_plan(
  config: &GeneratorConfig,
  request: &MealPlanRequest<'_>,
) -> Result<MealPlanOutcome, GenerateError> {
  let body = post_generation(config, MEAL_PLAN_FUNCTION, request).await?;

  let response: MealPlanResponse = serde_json::from_str(&body).map_err(|e| {
    eprintln!("Meal plan response did not match any contract shape: {}", e);
    eprintln!("Raw response: {}", body);
    GenerateError::Contract(e.to_string())
  })?;

  match response {
    MealPlanResponse::Meal { meal } => Ok(MealPlanOutcome::Meal(meal)),
    MealPlanResponse::MissingIngredients { missing_ingredients } => {
      Ok(MealPlanOutcome::MissingIngredients(missing_ingredients))
    }
    MealPlanResponse::Error { error } => Err(GenerateError::Generation(error)),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
