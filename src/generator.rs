//! Generation service logic
//!
//! The hosted side of the four generation functions: prompt assembly, Gemini
//! sampling parameters per surface, and post-processing of the model output
//! into the wire contracts the clients in `mealplan`, `workout`, and `chat`
//! expect. Kept separate from the clients so both halves of each contract are
//! testable against one another.

use crate::llm::{strip_code_fences, truncate_sentences, GeminiClient, GenerationOptions, LlmError};
use crate::mealplan::MealPlanResponse;
use crate::models::HealthProfile;
use crate::workout::{
  bmi_band, target_weight_change, Intensity, WeightGoal, WorkoutPlan, WorkoutType,
};

/// Per-meal ceiling when the profile has no daily limit to divide.
const DEFAULT_MEAL_CALORIE_CAP: i64 = 600;

const MENTAL_CHAT_SENTENCE_CAP: usize = 3;
const MEAL_CHAT_SENTENCE_CAP: usize = 4;

/// ---------------------------------------------------------------------------
/// Prompt Assembly
/// ---------------------------------------------------------------------------

fn max_calories_per_meal(profile: &HealthProfile) -> i64 {
  profile
    .daily_calorie_limit
    .map(|limit| limit / 3)
    .unwrap_or(DEFAULT_MEAL_CALORIE_CAP)
}

fn joined_goals(profile: &HealthProfile) -> String {
  profile
    .goals
    .iter()
    .map(|g| g.label())
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn meal_plan_prompt(
  ingredients: &str,
  profile: &HealthProfile,
  mood: &str,
  cuisine: &str,
) -> String {
  let cuisine_line = if cuisine.is_empty() { "Any" } else { cuisine };

  format!(
    r#"You are a professional nutritionist and chef. Generate a detailed meal plan based on:

Available Ingredients: {ingredients}
Cuisine Type: {cuisine_line}
User Region: {region}
User Goals: {goals}
Mood: {mood}
Maximum Calories: {max_calories} kcal

IMPORTANT RULES:
1. ONLY use ingredients from the available list
2. If ingredients are insufficient, respond with: {{"missingIngredients": ["ingredient1", "ingredient2"]}}
3. Consider the user's mood when suggesting meals (e.g., comfort food for stressed, energizing for tired)
4. Respect the regional cuisine preferences
5. Stay within the calorie limit
6. In the recipe field, use only plain text without special characters or line breaks. Use periods to separate steps.

Provide response in this EXACT JSON format (ensure all strings are properly escaped):
{{
  "meal": {{
    "name": "Meal name",
    "calories": 450,
    "ingredients": [
      {{"name": "ingredient", "amount": "100g", "calories": 120}}
    ],
    "recipe": "Step 1. Do this. Step 2. Do that. Step 3. Finish cooking.",
    "cuisine": "{cuisine}",
    "mood": "{mood}",
    "videoUrl": ""
  }}
}}

OR if ingredients insufficient:
{{
  "missingIngredients": ["ingredient1", "ingredient2"]
}}

CRITICAL: Return ONLY valid JSON. No markdown, no explanations, no newlines in strings."#,
    region = profile.region,
    goals = joined_goals(profile),
    max_calories = max_calories_per_meal(profile),
  )
}

pub fn workout_prompt(
  workout_type: WorkoutType,
  mood: &str,
  profile: &HealthProfile,
  heart_rate: Option<i64>,
) -> String {
  let goal = WeightGoal::from_goals(&profile.goals);
  let intensity = Intensity::from_heart_rate(heart_rate);
  let band = profile.bmi.map_or("unknown", bmi_band);

  let environment = match workout_type {
    WorkoutType::Home => "HOME (bodyweight exercises only, no equipment)",
    WorkoutType::Gym => "GYM (full access to equipment, machines, weights)",
  };

  let target_line = match (goal, target_weight_change(profile, goal)) {
    (WeightGoal::Lose, Some(kg)) => {
      format!("- Target weight to lose: {:.1} {}\n", kg, profile.weight_unit.label())
    }
    (WeightGoal::Gain, Some(kg)) => {
      format!("- Target weight to gain: {:.1} {}\n", kg, profile.weight_unit.label())
    }
    _ => String::new(),
  };

  let goal_focus = match goal {
    WeightGoal::Lose => {
      "   - Focus on high-intensity cardio, HIIT, and fat-burning exercises\n   \
       - Include compound movements to maximize calorie burn\n   \
       - Emphasize exercises that create calorie deficit"
    }
    WeightGoal::Gain => {
      "   - Focus on strength training and muscle building\n   \
       - Include heavy compound lifts (if gym) or progressive bodyweight exercises (if home)\n   \
       - Emphasize exercises that promote muscle hypertrophy"
    }
    WeightGoal::Maintain => {
      "   - Balance cardio and strength training\n   \
       - Focus on overall fitness and body composition\n   \
       - Include variety to maintain engagement"
    }
  };

  let heart_rate_line = heart_rate
    .map(|hr| format!("- Current Heart Rate: {} BPM\n", hr))
    .unwrap_or_default();

  let equipment_rule = match workout_type {
    WorkoutType::Home => "Only include bodyweight exercises that can be done at home without equipment",
    WorkoutType::Gym => "Include gym equipment like dumbbells, barbells, machines, cables",
  };

  format!(
    r#"Create a highly personalized workout plan based on these specific user details:

WORKOUT ENVIRONMENT: {environment}

USER DETAILS:
- Current Mood: {mood}
- Primary Goal: {goal_upper}
{target_line}- All Goals: {goals}
- Age: {age}
- Sex: {sex}
- Weight: {weight} {weight_unit}
- Height: {height} {height_unit}
- BMI: {bmi} ({band})
- Activity Level: {lifestyle}
{heart_rate_line}- Recommended Intensity: {intensity}

CRITICAL REQUIREMENTS:
1. Tailor exercises SPECIFICALLY for {goal}:
{goal_focus}

2. Match the {intensity} intensity level appropriate for their fitness
3. Consider their {mood} mood when selecting exercise types
4. {equipment_rule}
5. Account for {band} BMI category in exercise selection and intensity

Provide response in this EXACT JSON format:
{{
  "type": "Descriptive workout name that reflects the goal",
  "description": "Brief description emphasizing how this workout helps achieve their {goal} goal",
  "exercises": [
    {{"name": "exercise name", "sets": "3", "reps": "12-15 or time", "rest": "60s"}}
  ],
  "duration": 45,
  "caloriesBurned": 350,
  "weeklyFrequency": "4-5 days/week",
  "music": ["genre1", "genre2", "genre3"],
  "tips": ["tip1 relevant to {goal}", "tip2", "tip3"]
}}

IMPORTANT: The workout MUST be directly aligned with helping the user {goal}. Include 8-10 exercises minimum."#,
    goal = goal.as_str(),
    goal_upper = goal.as_str().to_uppercase(),
    goals = joined_goals(profile),
    age = profile.age.map_or("unspecified".to_string(), |a| a.to_string()),
    sex = profile.sex.map_or("unspecified", |s| s.label()),
    weight = profile.weight.map_or("unspecified".to_string(), |w| w.to_string()),
    weight_unit = profile.weight_unit.label(),
    height = profile.height.map_or("unspecified".to_string(), |h| h.to_string()),
    height_unit = profile.height_unit.label(),
    bmi = profile.bmi.map_or("unknown".to_string(), |b| b.to_string()),
    lifestyle = profile.lifestyle.map_or("unspecified", |l| l.label()),
    intensity = intensity.as_str(),
  )
}

pub fn mental_health_prompt(message: &str, mood: &str) -> String {
  let mut prompt = String::from(
    "You're a caring friend. Keep responses SUPER SHORT and supportive!\n\n\
     STRICT RULES:\n\
     - Maximum 2-3 sentences ONLY\n\
     - Be warm but brief\n\
     - Validate their feelings quickly\n\
     - Give 1 simple tip\n\
     - NO long explanations\n\
     - Like texting a supportive friend",
  );

  if mood == "Stressed" || mood == "Tired" {
    prompt.push_str(&format!("\n\nUser is {}. Extra gentle and calming.", mood));
  }

  prompt.push_str(&format!("\n\nUser's mood: {}\nUser: {}", mood, message));
  prompt
}

pub fn meal_chat_prompt(message: &str, profile: &HealthProfile) -> String {
  format!(
    "You're a friendly nutritionist. Keep it SUPER SHORT and casual!\n\n\
     STRICT RULES:\n\
     - Maximum 3-4 sentences ONLY\n\
     - Use simple, everyday language\n\
     - Give 1-2 quick tips\n\
     - Be encouraging but brief\n\
     - NO long lists or paragraphs\n\
     - Talk like you're texting a friend\n\n\
     User Info:\n\
     - Goals: {}\n\
     - Daily Calories: {} kcal\n\
     - From: {}\n\n\
     User: {}",
    joined_goals(profile),
    profile.daily_calorie_limit.map_or("unknown".to_string(), |c| c.to_string()),
    profile.region,
    message,
  )
}

/// ---------------------------------------------------------------------------
/// Fulfillment
/// ---------------------------------------------------------------------------

/// Run one meal generation against the model and classify the output into the
/// three-shape contract. An unparseable model body maps to the fixed
/// user-facing parse failure message rather than leaking serde detail.
pub async fn fulfill_meal_plan(
  client: &GeminiClient,
  ingredients: &str,
  profile: &HealthProfile,
  mood: &str,
  cuisine: &str,
) -> Result<MealPlanResponse, LlmError> {
  let prompt = meal_plan_prompt(ingredients, profile, mood, cuisine);
  let raw = client.complete(&prompt, &GenerationOptions::json(0.7, 2048)).await?;
  let cleaned = strip_code_fences(&raw);

  serde_json::from_str(&cleaned).map_err(|e| {
    eprintln!("Meal generation output unparseable: {}", e);
    LlmError::Parse("Failed to parse AI response. Please try again.".to_string())
  })
}

/// Run one workout generation and stamp the echoed fields (intensity, heart
/// rate, environment) onto the parsed plan before returning it.
pub async fn fulfill_workout_plan(
  client: &GeminiClient,
  workout_type: WorkoutType,
  mood: &str,
  profile: &HealthProfile,
  heart_rate: Option<i64>,
) -> Result<WorkoutPlan, LlmError> {
  let prompt = workout_prompt(workout_type, mood, profile, heart_rate);
  let raw = client.complete(&prompt, &GenerationOptions::json(0.8, 2048)).await?;
  let cleaned = strip_code_fences(&raw);

  let mut plan: WorkoutPlan = serde_json::from_str(&cleaned).map_err(|e| {
    eprintln!("Workout generation output unparseable: {}", e);
    LlmError::Parse("Failed to parse workout plan".to_string())
  })?;

  plan.intensity = Some(Intensity::from_heart_rate(heart_rate));
  plan.heart_rate = heart_rate;
  plan.workout_type = Some(workout_type);

  Ok(plan)
}

fn chat_options() -> (GenerationOptions, GenerationOptions) {
  let mut mental = GenerationOptions::text(0.95, 100);
  mental.top_p = Some(0.95);
  mental.top_k = Some(40);

  let mut meal = GenerationOptions::text(0.9, 150);
  meal.top_p = Some(0.95);
  meal.top_k = Some(40);

  (mental, meal)
}

/// One supportive-companion reply, capped at three sentences.
pub async fn counsel_reply(
  client: &GeminiClient,
  message: &str,
  mood: &str,
) -> Result<String, LlmError> {
  let prompt = mental_health_prompt(message, mood);
  let (options, _) = chat_options();
  let reply = client.complete(&prompt, &options).await?;
  Ok(truncate_sentences(&reply, MENTAL_CHAT_SENTENCE_CAP))
}

/// One nutrition-assistant reply, capped at four sentences.
pub async fn meal_chat_reply(
  client: &GeminiClient,
  message: &str,
  profile: &HealthProfile,
) -> Result<String, LlmError> {
  let prompt = meal_chat_prompt(message, profile);
  let (_, options) = chat_options();
  let reply = client.complete(&prompt, &options).await?;
  Ok(truncate_sentences(&reply, MEAL_CHAT_SENTENCE_CAP))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{gemini_body, mock_profile};
  use crate::workout::WorkoutType;

  #[test]
  fn test_meal_prompt_divides_daily_limit_across_three_meals() {
    let mut profile = mock_profile();
    profile.daily_calorie_limit = Some(2009);
    let prompt = meal_plan_prompt("eggs, rice", &profile, "Happy", "Japanese");
    // floor(2009 / 3) = 669
    assert!(prompt.contains("Maximum Calories: 669 kcal"));
    assert!(prompt.contains("Available Ingredients: eggs, rice"));
    assert!(prompt.contains("Cuisine Type: Japanese"));
  }

  #[test]
  fn test_meal_prompt_defaults_without_calorie_limit() {
    let mut profile = mock_profile();
    profile.daily_calorie_limit = None;
    let prompt = meal_plan_prompt("eggs", &profile, "", "");
    assert!(prompt.contains("Maximum Calories: 600 kcal"));
    assert!(prompt.contains("Cuisine Type: Any"));
  }

  #[test]
  fn test_workout_prompt_carries_derived_inputs() {
    let mut profile = mock_profile();
    profile.goals = vec![crate::models::Goal::LoseWeight];
    profile.weight = Some(90.0);
    profile.height = Some(175.0);
    profile.bmi = Some(29.4);

    let prompt = workout_prompt(WorkoutType::Home, "Tired", &profile, Some(65));
    assert!(prompt.contains("Primary Goal: LOSE WEIGHT"));
    assert!(prompt.contains("Recommended Intensity: high"));
    assert!(prompt.contains("(overweight)"));
    assert!(prompt.contains("Current Heart Rate: 65 BPM"));
    assert!(prompt.contains("Target weight to lose: 22.6 kg"));
    assert!(prompt.contains("bodyweight exercises only"));
  }

  #[test]
  fn test_workout_prompt_omits_heart_rate_and_target_when_absent() {
    let mut profile = mock_profile();
    profile.goals = vec![crate::models::Goal::ToneMuscles];

    let prompt = workout_prompt(WorkoutType::Gym, "Happy", &profile, None);
    assert!(!prompt.contains("Current Heart Rate"));
    assert!(!prompt.contains("Target weight to"));
    assert!(prompt.contains("Primary Goal: MAINTAIN WEIGHT"));
    assert!(prompt.contains("Recommended Intensity: medium"));
  }

  #[test]
  fn test_mental_health_prompt_gentler_for_stressed_and_tired() {
    let stressed = mental_health_prompt("rough day", "Stressed");
    assert!(stressed.contains("Extra gentle and calming"));

    let happy = mental_health_prompt("great day", "Happy");
    assert!(!happy.contains("Extra gentle and calming"));
    assert!(happy.contains("User's mood: Happy"));
  }

  #[tokio::test]
  async fn test_fulfill_meal_plan_strips_fences_and_parses() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/")
      .match_query(mockito::Matcher::Any)
      .with_status(200)
      .with_body(gemini_body(
        "```json\n{\"meal\": {\"name\": \"Tamago Bowl\", \"calories\": 420, \
         \"ingredients\": [], \"recipe\": \"Cook rice. Top with egg.\"}}\n```",
      ))
      .create_async()
      .await;

    let client = GeminiClient::with_endpoint("test-key", server.url());
    let profile = mock_profile();
    let response = fulfill_meal_plan(&client, "eggs, rice", &profile, "Happy", "Japanese")
      .await
      .unwrap();

    match response {
      MealPlanResponse::Meal { meal } => assert_eq!(meal.name, "Tamago Bowl"),
      other => panic!("expected meal, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_fulfill_meal_plan_unparseable_output_uses_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/")
      .match_query(mockito::Matcher::Any)
      .with_status(200)
      .with_body(gemini_body("Sure! Here's a tasty idea: omelette"))
      .create_async()
      .await;

    let client = GeminiClient::with_endpoint("test-key", server.url());
    let profile = mock_profile();
    let err = fulfill_meal_plan(&client, "eggs", &profile, "", "")
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Parse error: Failed to parse AI response. Please try again.");
  }

  #[tokio::test]
  async fn test_fulfill_workout_plan_stamps_echoed_fields() {
    let plan_json = "{\"type\": \"Strength Builder\", \"description\": \"d\", \
                     \"exercises\": [], \"duration\": 40, \"caloriesBurned\": 300, \
                     \"weeklyFrequency\": \"3 days/week\", \"music\": [], \"tips\": []}";

    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/")
      .match_query(mockito::Matcher::Any)
      .with_status(200)
      .with_body(gemini_body(plan_json))
      .create_async()
      .await;

    let client = GeminiClient::with_endpoint("test-key", server.url());
    let profile = mock_profile();
    let plan = fulfill_workout_plan(&client, WorkoutType::Gym, "Happy", &profile, Some(110))
      .await
      .unwrap();

    assert_eq!(plan.intensity, Some(Intensity::Low));
    assert_eq!(plan.heart_rate, Some(110));
    assert_eq!(plan.workout_type, Some(WorkoutType::Gym));
  }

  #[tokio::test]
  async fn test_counsel_reply_truncates_to_three_sentences() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("POST", "/")
      .match_query(mockito::Matcher::Any)
      .with_status(200)
      .with_body(gemini_body(
        "That sounds tough. You're doing your best. Try a short walk. Also drink water. And rest.",
      ))
      .create_async()
      .await;

    let client = GeminiClient::with_endpoint("test-key", server.url());
    let reply = counsel_reply(&client, "long day", "Tired").await.unwrap();
    assert_eq!(reply, "That sounds tough. You're doing your best. Try a short walk.");
  }
}
