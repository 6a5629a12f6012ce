//! Badge ledger and derived XP
//!
//! Total XP is recomputed from the badge collection on every read so it can
//! never drift from the ledger. Badge names are not deduplicated: earning the
//! same badge twice counts its XP twice.

use crate::models::Badge;

pub const XP_PER_LEVEL: i64 = 50;

pub const MEAL_LOGGED_BADGE: &str = "Healthy Meal Logged";
pub const MEAL_LOGGED_XP: i64 = 10;

/// The badge appended on every successful meal generation.
pub fn healthy_meal_logged() -> Badge {
  Badge::new(
    MEAL_LOGGED_BADGE,
    "You generated a healthy meal plan!",
    MEAL_LOGGED_XP,
  )
}

/// Append-only collection of earned badges.
#[derive(Debug, Clone, Default)]
pub struct BadgeLedger {
  badges: Vec<Badge>,
}

impl BadgeLedger {
  pub fn add(&mut self, badge: Badge) {
    self.badges.push(badge);
  }

  pub fn badges(&self) -> &[Badge] {
    &self.badges
  }

  pub fn total_xp(&self) -> i64 {
    self.badges.iter().map(|b| b.xp_points).sum()
  }

  pub fn level(&self) -> i64 {
    self.total_xp() / XP_PER_LEVEL
  }
}
