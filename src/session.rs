//! Session-wide state container
//!
//! One `Session` owns everything the app accumulates between launch and exit:
//! the health profile, the current mood, meals, badges, the two chat
//! transcripts, and the remembered meal-planner form values. All writes go
//! through the mutators below; none of them perform I/O and none can fail.
//! History-shaped collections (meals, badges, messages) are append-only and
//! are never reordered.

use crate::gamification::{self, BadgeLedger};
use crate::models::{Badge, HealthProfile, Meal, Message, Mood, ProfileUpdate, Sender, Transcript};

#[derive(Debug, Clone, Default)]
pub struct Session {
  profile: HealthProfile,
  mood: Option<Mood>,
  current_meal: Option<Meal>,
  meal_history: Vec<Meal>,
  ledger: BadgeLedger,
  mental_health_messages: Vec<Message>,
  meal_plan_messages: Vec<Message>,
  available_ingredients: String,
  preferred_cuisine: String,
}

impl Session {
  pub fn new() -> Self {
    Self::default()
  }

  /// -------------------------------------------------------------------------
  /// Readers
  /// -------------------------------------------------------------------------

  pub fn profile(&self) -> &HealthProfile {
    &self.profile
  }

  pub fn mood(&self) -> Option<Mood> {
    self.mood
  }

  /// Mood as the generation contracts see it: the label once set, an empty
  /// string before the user has picked one.
  pub fn mood_label(&self) -> &'static str {
    self.mood.map_or("", |m| m.as_str())
  }

  pub fn current_meal(&self) -> Option<&Meal> {
    self.current_meal.as_ref()
  }

  pub fn meal_history(&self) -> &[Meal] {
    &self.meal_history
  }

  pub fn badges(&self) -> &[Badge] {
    self.ledger.badges()
  }

  pub fn total_xp(&self) -> i64 {
    self.ledger.total_xp()
  }

  pub fn level(&self) -> i64 {
    self.ledger.level()
  }

  pub fn messages(&self, transcript: Transcript) -> &[Message] {
    match transcript {
      Transcript::MentalHealth => &self.mental_health_messages,
      Transcript::MealPlan => &self.meal_plan_messages,
    }
  }

  pub fn available_ingredients(&self) -> &str {
    &self.available_ingredients
  }

  pub fn preferred_cuisine(&self) -> &str {
    &self.preferred_cuisine
  }

  /// -------------------------------------------------------------------------
  /// Mutators
  /// -------------------------------------------------------------------------

  /// Shallow-merge a partial edit into the profile. Derived metrics are not
  /// recomputed here; callers that changed an input field supply the fresh
  /// bmi/calorie pair inside the update.
  pub fn update_profile(&mut self, update: ProfileUpdate) {
    update.apply(&mut self.profile);
  }

  pub fn set_mood(&mut self, mood: Mood) {
    self.mood = Some(mood);
  }

  pub fn set_current_meal(&mut self, meal: Option<Meal>) {
    self.current_meal = meal;
  }

  pub fn add_meal_to_history(&mut self, meal: Meal) {
    self.meal_history.push(meal);
  }

  pub fn add_badge(&mut self, badge: Badge) {
    self.ledger.add(badge);
  }

  pub fn add_message(&mut self, transcript: Transcript, sender: Sender, text: impl Into<String>) {
    let message = Message {
      sender,
      text: text.into(),
    };
    match transcript {
      Transcript::MentalHealth => self.mental_health_messages.push(message),
      Transcript::MealPlan => self.meal_plan_messages.push(message),
    }
  }

  /// Append the synthetic opening AI message, but only while the transcript is
  /// still empty. Returns whether anything was appended.
  pub fn seed_transcript(&mut self, transcript: Transcript, text: &str) -> bool {
    if !self.messages(transcript).is_empty() {
      return false;
    }
    self.add_message(transcript, Sender::Ai, text);
    true
  }

  pub fn set_available_ingredients(&mut self, ingredients: impl Into<String>) {
    self.available_ingredients = ingredients.into();
  }

  pub fn set_preferred_cuisine(&mut self, cuisine: impl Into<String>) {
    self.preferred_cuisine = cuisine.into();
  }

  /// The meal-success transaction: replace the current meal, append it to
  /// history, and append the meal badge. Runs under one `&mut self` borrow so
  /// no reader can observe a partially applied state.
  pub fn record_generated_meal(&mut self, meal: Meal) {
    self.meal_history.push(meal.clone());
    self.ledger.add(gamification::healthy_meal_logged());
    self.current_meal = Some(meal);
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gamification::MEAL_LOGGED_XP;
  use crate::models::{DerivedMetrics, Goal};
  use crate::test_utils::mock_meal;

  #[test]
  fn test_update_profile_is_a_shallow_merge() {
    let mut session = Session::new();
    session.update_profile(ProfileUpdate {
      region: Some("Japan".into()),
      age: Some(40),
      ..Default::default()
    });
    session.update_profile(ProfileUpdate {
      goals: Some(vec![Goal::MaintainWeight]),
      ..Default::default()
    });

    assert_eq!(session.profile().region, "Japan");
    assert_eq!(session.profile().age, Some(40));
    assert_eq!(session.profile().goals, vec![Goal::MaintainWeight]);
  }

  #[test]
  fn test_update_profile_does_not_recompute_derived_metrics() {
    let mut session = Session::new();
    session.update_profile(ProfileUpdate {
      weight: Some(90.0),
      height: Some(175.0),
      ..Default::default()
    });
    // No derived pair supplied, so nothing derived appears.
    assert!(session.profile().bmi.is_none());

    session.update_profile(ProfileUpdate {
      derived: Some(DerivedMetrics {
        bmi: 29.4,
        daily_calorie_limit: 1950,
      }),
      ..Default::default()
    });
    assert_eq!(session.profile().bmi, Some(29.4));
    assert_eq!(session.profile().daily_calorie_limit, Some(1950));
  }

  #[test]
  fn test_meal_history_is_append_only_chronological() {
    let mut session = Session::new();
    session.add_meal_to_history(mock_meal("Breakfast Bowl"));
    session.add_meal_to_history(mock_meal("Lunch Wrap"));
    session.add_meal_to_history(mock_meal("Dinner Stew"));

    let names: Vec<&str> = session.meal_history().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Breakfast Bowl", "Lunch Wrap", "Dinner Stew"]);
  }

  #[test]
  fn test_record_generated_meal_applies_all_three_effects() {
    let mut session = Session::new();
    session.record_generated_meal(mock_meal("Grilled Salmon"));

    assert_eq!(session.current_meal().unwrap().name, "Grilled Salmon");
    assert_eq!(session.meal_history().len(), 1);
    assert_eq!(session.badges().len(), 1);
    assert_eq!(session.total_xp(), MEAL_LOGGED_XP);
  }

  #[test]
  fn test_regeneration_replaces_current_but_extends_history() {
    let mut session = Session::new();
    session.record_generated_meal(mock_meal("First"));
    session.record_generated_meal(mock_meal("Second"));

    assert_eq!(session.current_meal().unwrap().name, "Second");
    assert_eq!(session.meal_history().len(), 2);
    assert_eq!(session.meal_history()[0].name, "First");
    assert_eq!(session.total_xp(), 2 * MEAL_LOGGED_XP);
  }

  #[test]
  fn test_transcripts_are_independent() {
    let mut session = Session::new();
    session.add_message(Transcript::MentalHealth, Sender::User, "hi");
    session.add_message(Transcript::MealPlan, Sender::User, "what about lunch?");
    session.add_message(Transcript::MentalHealth, Sender::Ai, "hello!");

    assert_eq!(session.messages(Transcript::MentalHealth).len(), 2);
    assert_eq!(session.messages(Transcript::MealPlan).len(), 1);
  }

  #[test]
  fn test_seed_transcript_only_once() {
    let mut session = Session::new();
    assert!(session.seed_transcript(Transcript::MealPlan, "Hello!"));
    assert!(!session.seed_transcript(Transcript::MealPlan, "Hello again!"));

    let messages = session.messages(Transcript::MealPlan);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::Ai);
    assert_eq!(messages[0].text, "Hello!");
  }

  #[test]
  fn test_mood_label_before_and_after_selection() {
    let mut session = Session::new();
    assert_eq!(session.mood_label(), "");
    session.set_mood(Mood::Stressed);
    assert_eq!(session.mood_label(), "Stressed");
  }
}
