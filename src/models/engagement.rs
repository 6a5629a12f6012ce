use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user's current mood, set on the mood screen. Read as context by both
/// generation pipelines; the store never re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
  Happy,
  Tired,
  Stressed,
  Energetic,
}

impl Mood {
  pub fn as_str(&self) -> &'static str {
    match self {
      Mood::Happy => "Happy",
      Mood::Tired => "Tired",
      Mood::Stressed => "Stressed",
      Mood::Energetic => "Energetic",
    }
  }
}

/// An earned badge. Append-only; total XP is always derived from the
/// collection, never stored next to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
  pub name: String,
  pub description: String,
  pub xp_points: i64,
  pub earned_at: DateTime<Utc>,
}

impl Badge {
  pub fn new(name: impl Into<String>, description: impl Into<String>, xp_points: i64) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      xp_points,
      earned_at: Utc::now(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
  User,
  Ai,
}

/// One entry in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub sender: Sender,
  pub text: String,
}

/// The two independent chat transcripts the session keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transcript {
  MentalHealth,
  MealPlan,
}
