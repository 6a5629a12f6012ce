use serde::{Deserialize, Serialize};

/// A wellness goal chosen during intake. Serialized in the display form the
/// generation contracts expect ("Lose Weight", not "loseWeight").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
  #[serde(rename = "Lose Weight")]
  LoseWeight,
  #[serde(rename = "Gain Weight")]
  GainWeight,
  #[serde(rename = "Maintain Weight")]
  MaintainWeight,
  #[serde(rename = "Tone Muscles")]
  ToneMuscles,
}

impl Goal {
  pub fn label(&self) -> &'static str {
    match self {
      Goal::LoseWeight => "Lose Weight",
      Goal::GainWeight => "Gain Weight",
      Goal::MaintainWeight => "Maintain Weight",
      Goal::ToneMuscles => "Tone Muscles",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
  Sedentary,
  Moderate,
  Active,
}

impl Lifestyle {
  /// TDEE activity multiplier for this lifestyle.
  pub fn activity_multiplier(&self) -> f64 {
    match self {
      Lifestyle::Sedentary => 1.2,
      Lifestyle::Moderate => 1.55,
      Lifestyle::Active => 1.725,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Lifestyle::Sedentary => "sedentary",
      Lifestyle::Moderate => "moderate",
      Lifestyle::Active => "active",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
  Male,
  Female,
  Other,
}

impl Sex {
  pub fn label(&self) -> &'static str {
    match self {
      Sex::Male => "male",
      Sex::Female => "female",
      Sex::Other => "other",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
  #[serde(rename = "kg")]
  Kg,
  #[serde(rename = "lbs")]
  Lbs,
}

impl WeightUnit {
  pub fn label(&self) -> &'static str {
    match self {
      WeightUnit::Kg => "kg",
      WeightUnit::Lbs => "lbs",
    }
  }
}

/// Height is either centimeters or a single combined decimal-feet value
/// (5.5 means five and a half feet, not 5ft 5in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightUnit {
  #[serde(rename = "cm")]
  Cm,
  #[serde(rename = "ft/in")]
  FtIn,
}

impl HeightUnit {
  pub fn label(&self) -> &'static str {
    match self {
      HeightUnit::Cm => "cm",
      HeightUnit::FtIn => "ft/in",
    }
  }
}

/// The session-wide health profile. Created empty at session start and
/// overwritten wholesale by the intake/edit flow, never deleted.
///
/// `bmi` and `daily_calorie_limit` are derived values: they are computed
/// together from one weight/height/age/sex/lifestyle/goals snapshot and only
/// ever written as a pair (see [`DerivedMetrics`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
  pub goals: Vec<Goal>,
  pub lifestyle: Option<Lifestyle>,
  pub region: String,
  pub age: Option<i64>,
  pub sex: Option<Sex>,
  pub weight: Option<f64>,
  pub weight_unit: WeightUnit,
  pub height: Option<f64>,
  pub height_unit: HeightUnit,
  pub bmi: Option<f64>,
  pub daily_calorie_limit: Option<i64>,
}

impl Default for HealthProfile {
  fn default() -> Self {
    Self {
      goals: Vec::new(),
      lifestyle: None,
      region: String::new(),
      age: None,
      sex: None,
      weight: None,
      weight_unit: WeightUnit::Kg,
      height: None,
      height_unit: HeightUnit::Cm,
      bmi: None,
      daily_calorie_limit: None,
    }
  }
}

/// The derived pair written alongside a profile edit. Grouping the two fields
/// makes it impossible to update one without the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
  pub bmi: f64,
  pub daily_calorie_limit: i64,
}

/// A partial profile edit, shallow-merged into the stored profile. The store
/// does not recompute anything: callers that changed an input field must
/// include the freshly computed [`DerivedMetrics`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
  pub goals: Option<Vec<Goal>>,
  pub lifestyle: Option<Lifestyle>,
  pub region: Option<String>,
  pub age: Option<i64>,
  pub sex: Option<Sex>,
  pub weight: Option<f64>,
  pub weight_unit: Option<WeightUnit>,
  pub height: Option<f64>,
  pub height_unit: Option<HeightUnit>,
  pub derived: Option<DerivedMetrics>,
}

impl ProfileUpdate {
  /// Shallow-merge this update into `profile`.
  pub fn apply(self, profile: &mut HealthProfile) {
    if let Some(goals) = self.goals {
      profile.goals = goals;
    }
    if let Some(lifestyle) = self.lifestyle {
      profile.lifestyle = Some(lifestyle);
    }
    if let Some(region) = self.region {
      profile.region = region;
    }
    if let Some(age) = self.age {
      profile.age = Some(age);
    }
    if let Some(sex) = self.sex {
      profile.sex = Some(sex);
    }
    if let Some(weight) = self.weight {
      profile.weight = Some(weight);
    }
    if let Some(unit) = self.weight_unit {
      profile.weight_unit = unit;
    }
    if let Some(height) = self.height {
      profile.height = Some(height);
    }
    if let Some(unit) = self.height_unit {
      profile.height_unit = unit;
    }
    if let Some(derived) = self.derived {
      profile.bmi = Some(derived.bmi);
      profile.daily_calorie_limit = Some(derived.daily_calorie_limit);
    }
  }
}
