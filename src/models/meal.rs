use serde::{Deserialize, Serialize};

/// A generated meal. Created only from a successful generation response and
/// immutable afterwards: regeneration replaces the current meal and appends to
/// history, it never edits an existing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
  pub name: String,
  pub calories: i64,
  pub ingredients: Vec<Ingredient>,
  pub recipe: String,
  #[serde(default)]
  pub cuisine: String,
  /// The mood that was active when this meal was generated.
  #[serde(default)]
  pub mood: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
  pub name: String,
  /// Free-text quantity, e.g. "100g" or "2 cups".
  pub amount: String,
  pub calories: i64,
}
