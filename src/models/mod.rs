pub mod engagement;
pub mod meal;
pub mod profile;

pub use engagement::{Badge, Message, Mood, Sender, Transcript};
pub use meal::{Ingredient, Meal};
pub use profile::{
  DerivedMetrics, Goal, HealthProfile, HeightUnit, Lifestyle, ProfileUpdate, Sex, WeightUnit,
};
