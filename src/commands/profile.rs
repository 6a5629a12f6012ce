//! Tauri commands for the health profile and its derived metrics

use std::sync::Arc;
use tauri::State;

use crate::health::{
  calculate_bmi, calculate_daily_calories, calculate_weight_loss_target, classify_bmi,
  BmiClassification, WeightLossTarget,
};
use crate::models::{
  DerivedMetrics, Goal, HealthProfile, HeightUnit, Lifestyle, ProfileUpdate, Sex, WeightUnit,
};
use crate::state::AppState;

#[tauri::command]
pub async fn get_health_profile(
  state: State<'_, Arc<AppState>>,
) -> Result<HealthProfile, String> {
  Ok(state.session().profile().clone())
}

/// Merge an intake/edit submission into the stored profile. BMI and the daily
/// calorie budget are recomputed from the merged snapshot whenever weight,
/// height, and age are all known; they always change together.
#[tauri::command]
#[allow(clippy::too_many_arguments)]
pub async fn update_health_profile(
  state: State<'_, Arc<AppState>>,
  goals: Option<Vec<Goal>>,
  lifestyle: Option<Lifestyle>,
  region: Option<String>,
  age: Option<i64>,
  sex: Option<Sex>,
  weight: Option<f64>,
  weight_unit: Option<WeightUnit>,
  height: Option<f64>,
  height_unit: Option<HeightUnit>,
) -> Result<HealthProfile, String> {
  let mut session = state.session();

  session.update_profile(ProfileUpdate {
    goals,
    lifestyle,
    region,
    age,
    sex,
    weight,
    weight_unit,
    height,
    height_unit,
    derived: None,
  });

  let snapshot = session.profile().clone();
  if let (Some(weight), Some(height), Some(age)) = (snapshot.weight, snapshot.height, snapshot.age)
  {
    let bmi = calculate_bmi(weight, snapshot.weight_unit, height, snapshot.height_unit);
    let daily_calorie_limit = calculate_daily_calories(
      weight,
      snapshot.weight_unit,
      height,
      snapshot.height_unit,
      age,
      snapshot.sex,
      snapshot.lifestyle,
      &snapshot.goals,
    );
    session.update_profile(ProfileUpdate {
      derived: Some(DerivedMetrics {
        bmi,
        daily_calorie_limit,
      }),
      ..Default::default()
    });
  }

  Ok(session.profile().clone())
}

#[tauri::command]
pub async fn get_bmi_classification(
  state: State<'_, Arc<AppState>>,
) -> Result<Option<BmiClassification>, String> {
  Ok(state.session().profile().bmi.map(classify_bmi))
}

/// Projection toward the optimum BMI ceiling. None while the profile is
/// incomplete or the BMI is already in range.
#[tauri::command]
pub async fn get_weight_loss_target(
  state: State<'_, Arc<AppState>>,
) -> Result<Option<WeightLossTarget>, String> {
  let session = state.session();
  let profile = session.profile();

  let (Some(weight), Some(height), Some(bmi)) = (profile.weight, profile.height, profile.bmi)
  else {
    return Ok(None);
  };

  Ok(calculate_weight_loss_target(
    weight,
    profile.weight_unit,
    height,
    profile.height_unit,
    bmi,
  ))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
