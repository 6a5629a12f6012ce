//! Deterministic health metrics
//!
//! Pure functions over intake fields: BMI, BMI classification, daily calorie
//! budget (Mifflin-St Jeor), and the weight-loss projection. These run once
//! per profile update; the results are cached on the profile and nothing else
//! in the system re-derives them.

use serde::{Deserialize, Serialize};

use crate::models::{Goal, HeightUnit, Lifestyle, Sex, WeightUnit};
use crate::units;

/// Upper edge of the optimum BMI band; also the projection target.
pub const OPTIMUM_BMI_CEILING: f64 = 24.9;

/// Assumed safe loss rate for the projection, kg per week.
pub const SAFE_WEEKLY_LOSS_KG: f64 = 0.5;

const LOSE_WEIGHT_DEFICIT: f64 = 500.0;
const GAIN_WEIGHT_SURPLUS: f64 = 500.0;

/// ---------------------------------------------------------------------------
/// BMI
/// ---------------------------------------------------------------------------

/// BMI = kg / m², rounded half-away-from-zero to one decimal.
pub fn calculate_bmi(
  weight: f64,
  weight_unit: WeightUnit,
  height: f64,
  height_unit: HeightUnit,
) -> f64 {
  let kg = units::to_kg(weight, weight_unit);
  let m = units::to_meters(height, height_unit);
  let bmi = kg / (m * m);
  (bmi * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
  #[serde(rename = "Underweight")]
  Underweight,
  #[serde(rename = "Optimum range")]
  OptimumRange,
  #[serde(rename = "Overweight")]
  Overweight,
  #[serde(rename = "Class I obesity")]
  ObesityClass1,
  #[serde(rename = "Class II obesity")]
  ObesityClass2,
  #[serde(rename = "Class III obesity")]
  ObesityClass3,
}

/// Category plus the presentation hints the renderers consume. `range` and
/// `color` carry no meaning inside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiClassification {
  pub category: BmiCategory,
  pub range: &'static str,
  pub color: &'static str,
}

/// Classify a BMI value. Band boundaries are lower-inclusive: 18.5 is already
/// optimum, 25.0 is already overweight, and so on.
pub fn classify_bmi(bmi: f64) -> BmiClassification {
  if bmi < 18.5 {
    BmiClassification {
      category: BmiCategory::Underweight,
      range: "Less than 18.5",
      color: "blue",
    }
  } else if bmi < 25.0 {
    BmiClassification {
      category: BmiCategory::OptimumRange,
      range: "18.5 to 24.9",
      color: "green",
    }
  } else if bmi < 30.0 {
    BmiClassification {
      category: BmiCategory::Overweight,
      range: "25 to 29.9",
      color: "yellow",
    }
  } else if bmi < 35.0 {
    BmiClassification {
      category: BmiCategory::ObesityClass1,
      range: "30 to 34.9",
      color: "orange",
    }
  } else if bmi < 40.0 {
    BmiClassification {
      category: BmiCategory::ObesityClass2,
      range: "35 to 39.9",
      color: "red",
    }
  } else {
    BmiClassification {
      category: BmiCategory::ObesityClass3,
      range: "More than 40",
      color: "red",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Daily Calorie Budget (Mifflin-St Jeor)
/// ---------------------------------------------------------------------------

/// BMR via Mifflin-St Jeor scaled by the lifestyle multiplier, then adjusted
/// for the weight goal. An unspecified sex takes the "other" offset (-78) and
/// an unspecified lifestyle counts as sedentary. Lose Weight wins over Gain
/// Weight when both are selected.
pub fn calculate_daily_calories(
  weight: f64,
  weight_unit: WeightUnit,
  height: f64,
  height_unit: HeightUnit,
  age: i64,
  sex: Option<Sex>,
  lifestyle: Option<Lifestyle>,
  goals: &[Goal],
) -> i64 {
  let kg = units::to_kg(weight, weight_unit);
  let cm = units::to_cm(height, height_unit);

  let sex_offset = match sex {
    Some(Sex::Male) => 5.0,
    Some(Sex::Female) => -161.0,
    Some(Sex::Other) | None => -78.0,
  };
  let bmr = 10.0 * kg + 6.25 * cm - 5.0 * age as f64 + sex_offset;

  let multiplier = lifestyle.map_or(1.2, |l| l.activity_multiplier());
  let mut tdee = bmr * multiplier;

  if goals.contains(&Goal::LoseWeight) {
    tdee -= LOSE_WEIGHT_DEFICIT;
  } else if goals.contains(&Goal::GainWeight) {
    tdee += GAIN_WEIGHT_SURPLUS;
  }

  tdee.round() as i64
}

/// ---------------------------------------------------------------------------
/// Weight-Loss Projection
/// ---------------------------------------------------------------------------

/// Projection toward the top of the optimum band. Weight figures are reported
/// in the caller's original unit; `weeks` is unit-independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLossTarget {
  pub target_weight: i64,
  pub weight_to_lose: i64,
  pub weeks: i64,
  pub unit: WeightUnit,
}

/// Returns None when the BMI is already at or below 24.9. Otherwise projects
/// the weight at BMI 24.9 and the weeks needed at 0.5 kg/week.
pub fn calculate_weight_loss_target(
  current_weight: f64,
  weight_unit: WeightUnit,
  height: f64,
  height_unit: HeightUnit,
  bmi: f64,
) -> Option<WeightLossTarget> {
  if bmi <= OPTIMUM_BMI_CEILING {
    return None;
  }

  let current_kg = units::to_kg(current_weight, weight_unit);
  let m = units::to_meters(height, height_unit);

  let target_kg = OPTIMUM_BMI_CEILING * (m * m);
  let to_lose_kg = current_kg - target_kg;
  let weeks = (to_lose_kg / SAFE_WEEKLY_LOSS_KG).ceil() as i64;

  Some(WeightLossTarget {
    target_weight: units::from_kg(target_kg, weight_unit).round() as i64,
    weight_to_lose: units::from_kg(to_lose_kg, weight_unit).round() as i64,
    weeks,
    unit: weight_unit,
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
