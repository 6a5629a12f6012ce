//! Weight and height unit conversions
//!
//! Every calculation in the metrics layer goes through these helpers. Inputs
//! are not validated here: negative or zero values propagate mathematically
//! and guarding against them is the intake form's job.

use crate::models::{HeightUnit, WeightUnit};

pub const KG_PER_LB: f64 = 0.453592;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const CM_PER_FOOT: f64 = 30.48;

pub fn to_kg(weight: f64, unit: WeightUnit) -> f64 {
  match unit {
    WeightUnit::Kg => weight,
    WeightUnit::Lbs => weight * KG_PER_LB,
  }
}

/// Convert a kilogram figure back into the caller's unit.
pub fn from_kg(weight_kg: f64, unit: WeightUnit) -> f64 {
  match unit {
    WeightUnit::Kg => weight_kg,
    WeightUnit::Lbs => weight_kg / KG_PER_LB,
  }
}

pub fn to_meters(height: f64, unit: HeightUnit) -> f64 {
  match unit {
    HeightUnit::Cm => height / 100.0,
    HeightUnit::FtIn => height * METERS_PER_FOOT,
  }
}

pub fn to_cm(height: f64, unit: HeightUnit) -> f64 {
  match unit {
    HeightUnit::Cm => height,
    HeightUnit::FtIn => height * CM_PER_FOOT,
  }
}
