//! Workout plan generation client
//!
//! Builds the workout request from profile + mood + optional heart rate and
//! parses the structured plan the generator returns. The derived inputs
//! (weight goal, BMI band, intensity, target weight change) mirror what the
//! deployed service computes so the two halves always agree.

use serde::{Deserialize, Serialize};

use crate::generate::{post_generation, GenerateError, GeneratorConfig};
use crate::models::{Goal, HealthProfile, HeightUnit, WeightUnit};

const WORKOUT_FUNCTION: &str = "workout-generator";

/// The reference BMI the target-weight-change estimate steers toward.
pub const REFERENCE_BMI: f64 = 22.0;

const LBS_PER_KG: f64 = 2.20462;

/// ---------------------------------------------------------------------------
/// Derived Inputs
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
  Home,
  Gym,
}

impl WorkoutType {
  pub fn as_str(&self) -> &'static str {
    match self {
      WorkoutType::Home => "home",
      WorkoutType::Gym => "gym",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
  High,
  Medium,
  Low,
}

impl Intensity {
  /// Heart-rate to intensity mapping, reproduced exactly as the deployed
  /// generator computes it. The thresholds run opposite to cardiovascular
  /// convention (lower heart rate -> higher recommended intensity); keep them
  /// as-is so client and service agree.
  pub fn from_heart_rate(heart_rate: Option<i64>) -> Self {
    match heart_rate {
      Some(hr) if hr < 70 => Intensity::High,
      Some(hr) if hr < 100 => Intensity::Medium,
      Some(_) => Intensity::Low,
      None => Intensity::Medium,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Intensity::High => "high",
      Intensity::Medium => "medium",
      Intensity::Low => "low",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightGoal {
  Lose,
  Gain,
  Maintain,
}

impl WeightGoal {
  /// First-match precedence: Lose Weight beats Gain Weight, anything else
  /// maintains.
  pub fn from_goals(goals: &[Goal]) -> Self {
    if goals.contains(&Goal::LoseWeight) {
      WeightGoal::Lose
    } else if goals.contains(&Goal::GainWeight) {
      WeightGoal::Gain
    } else {
      WeightGoal::Maintain
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      WeightGoal::Lose => "lose weight",
      WeightGoal::Gain => "gain weight",
      WeightGoal::Maintain => "maintain weight",
    }
  }
}

/// The four-band BMI label the workout generator uses (coarser than the
/// six-band classification shown on the results screen).
pub fn bmi_band(bmi: f64) -> &'static str {
  if bmi < 18.5 {
    "underweight"
  } else if bmi < 25.0 {
    "normal weight"
  } else if bmi < 30.0 {
    "overweight"
  } else {
    "obese"
  }
}

/// Estimated weight change toward [`REFERENCE_BMI`], in the profile's weight
/// unit, clamped at zero. None when the goal is maintain or the profile lacks
/// weight/height.
///
/// The deployed service reads non-cm heights as inches here (h * 0.0254),
/// unlike the intake math which treats them as decimal feet. Reproduced as-is.
pub fn target_weight_change(profile: &HealthProfile, goal: WeightGoal) -> Option<f64> {
  let weight = profile.weight?;
  let height = profile.height?;

  let meters = match profile.height_unit {
    HeightUnit::Cm => height / 100.0,
    HeightUnit::FtIn => height * 0.0254,
  };
  let target_kg = REFERENCE_BMI * (meters * meters);

  let change = match goal {
    WeightGoal::Lose => match profile.weight_unit {
      WeightUnit::Kg => weight - target_kg,
      WeightUnit::Lbs => weight - target_kg * LBS_PER_KG,
    },
    WeightGoal::Gain => match profile.weight_unit {
      WeightUnit::Kg => target_kg - weight,
      WeightUnit::Lbs => target_kg * LBS_PER_KG - weight,
    },
    WeightGoal::Maintain => return None,
  };

  Some(change.max(0.0))
}

/// ---------------------------------------------------------------------------
/// Request / Response Contract
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanRequest<'a> {
  pub workout_type: WorkoutType,
  pub current_mood: &'a str,
  pub user_profile: &'a HealthProfile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub heart_rate: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
  #[serde(rename = "type")]
  pub plan_type: String,
  pub description: String,
  /// 8-10 exercises expected from the generator, not mechanically enforced.
  pub exercises: Vec<Exercise>,
  /// Minutes.
  pub duration: i64,
  pub calories_burned: i64,
  pub weekly_frequency: String,
  #[serde(default)]
  pub music: Vec<String>,
  #[serde(default)]
  pub tips: Vec<String>,
  // Echoed by the service; filled in client-side when absent.
  #[serde(default)]
  pub intensity: Option<Intensity>,
  #[serde(default)]
  pub heart_rate: Option<i64>,
  #[serde(default)]
  pub workout_type: Option<WorkoutType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
  pub name: String,
  pub sets: String,
  pub reps: String,
  pub rest: String,
}

/// ---------------------------------------------------------------------------
/// Client
/// ---------------------------------------------------------------------------

/// One workout generation round trip. The returned plan always carries
/// intensity, heart rate, and workout type, whether or not the service echoed
/// them back.
pub async fn generate_workout_plan(
  config: &GeneratorConfig,
  request: &WorkoutPlanRequest<'_>,
) -> Result<WorkoutPlan, GenerateError> {
  let body = post_generation(config, WORKOUT_FUNCTION, request).await?;

  let mut plan: WorkoutPlan = serde_json::from_str(&body).map_err(|e| {
    eprintln!("Workout response did not match the plan contract: {}", e);
    eprintln!("Raw response: {}", body);
    GenerateError::Contract(e.to_string())
  })?;

  plan.intensity.get_or_insert(Intensity::from_heart_rate(request.heart_rate));
  plan.heart_rate = plan.heart_rate.or(request.heart_rate);
  plan.workout_type.get_or_insert(request.workout_type);

  Ok(plan)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
