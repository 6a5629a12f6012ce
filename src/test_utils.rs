//! Test utilities and helpers
//!
//! Mock data factories shared by the unit tests, plus helpers for pointing
//! the HTTP clients at mockito servers.

use crate::generate::GeneratorConfig;
use crate::models::{Goal, HealthProfile, Lifestyle, Meal, Sex};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A fully filled-in profile: 70 kg / 175 cm male, 30, sedentary. The derived
/// pair matches what the intake flow computes for these inputs.
pub fn mock_profile() -> HealthProfile {
  HealthProfile {
    goals: vec![Goal::MaintainWeight],
    lifestyle: Some(Lifestyle::Sedentary),
    region: "Japan".to_string(),
    age: Some(30),
    sex: Some(Sex::Male),
    weight: Some(70.0),
    height: Some(175.0),
    bmi: Some(22.9),
    daily_calorie_limit: Some(2009),
    ..Default::default()
  }
}

pub fn mock_meal(name: &str) -> Meal {
  Meal {
    name: name.to_string(),
    calories: 420,
    ingredients: Vec::new(),
    recipe: "Prep. Cook. Serve.".to_string(),
    cuisine: "Any".to_string(),
    mood: String::new(),
    video_url: None,
  }
}

/// Generator config pointed at a mockito server.
pub fn mock_generator_config(url: &str) -> GeneratorConfig {
  GeneratorConfig {
    base_url: url.to_string(),
    api_key: "test-key".to_string(),
  }
}

/// Wrap raw model output in the Gemini response envelope.
pub fn gemini_body(text: &str) -> String {
  serde_json::json!({
    "candidates": [{
      "content": { "parts": [{ "text": text }] }
    }]
  })
  .to_string()
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_profile_is_internally_consistent() {
    let profile = mock_profile();
    let bmi = crate::health::calculate_bmi(
      profile.weight.unwrap(),
      profile.weight_unit,
      profile.height.unwrap(),
      profile.height_unit,
    );
    assert_eq!(Some(bmi), profile.bmi);

    let calories = crate::health::calculate_daily_calories(
      profile.weight.unwrap(),
      profile.weight_unit,
      profile.height.unwrap(),
      profile.height_unit,
      profile.age.unwrap(),
      profile.sex,
      profile.lifestyle,
      &profile.goals,
    );
    assert_eq!(Some(calories), profile.daily_calorie_limit);
  }

  #[test]
  fn test_gemini_body_escapes_payload() {
    let body = gemini_body("line with \"quotes\"");
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
      parsed["candidates"][0]["content"]["parts"][0]["text"],
      "line with \"quotes\""
    );
  }
}
