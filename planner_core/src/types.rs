//! Core domain types for the workout planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise records as they come from the catalog
//! - Experience levels and training focus labels
//! - The user profile consumed by the planner
//! - Planned exercises and the day-keyed workout plan

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Catalog Records
// ============================================================================

/// One row of the exercise catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExerciseRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "BodyPart")]
    pub body_part: String,
}

impl ExerciseRecord {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        body_part: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            body_part: body_part.into(),
        }
    }

    /// Case-insensitive match on the exercise type
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }

    /// Case-insensitive match on the body part
    pub fn targets(&self, body_part: &str) -> bool {
        self.body_part.eq_ignore_ascii_case(body_part)
    }
}

// ============================================================================
// Experience Level
// ============================================================================

/// Training experience level
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    /// Anything else; prescribed with the fallback ranges
    Other(String),
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches(|c| c == '\'' || c == '"');
        Ok(match trimmed.to_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Other(trimmed.to_string()),
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => f.write_str("Beginner"),
            Level::Intermediate => f.write_str("Intermediate"),
            Level::Advanced => f.write_str("Advanced"),
            Level::Other(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Focus Label
// ============================================================================

/// Training focus predicted for the user
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusLabel {
    FatLoss,
    MuscleGain,
    GeneralFitness,
    WeightLoss,
    /// Label the planner has no category table for
    Other(String),
}

impl FocusLabel {
    /// Exercise categories eligible for this focus, in table order
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            FocusLabel::FatLoss => &["HIIT", "Cardio", "Strength", "Plyometrics", "Stretching"],
            FocusLabel::MuscleGain => &[
                "Strength",
                "Powerlifting",
                "Olympic Weightlifting",
                "Strongman",
                "Plyometrics",
            ],
            FocusLabel::GeneralFitness => {
                &["Cardio", "Strength", "Stretching", "Flexibility", "Balance"]
            }
            FocusLabel::WeightLoss => {
                &["HIIT", "Cardio", "Plyometrics", "Strength", "Circuit Training"]
            }
            FocusLabel::Other(_) => &["Cardio", "Strength", "Stretching"],
        }
    }
}

impl FromStr for FocusLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Ok(match normalized.as_str() {
            "fat_loss" => FocusLabel::FatLoss,
            "muscle_gain" => FocusLabel::MuscleGain,
            "general_fitness" => FocusLabel::GeneralFitness,
            "weight_loss" => FocusLabel::WeightLoss,
            _ => FocusLabel::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for FocusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusLabel::FatLoss => f.write_str("Fat_Loss"),
            FocusLabel::MuscleGain => f.write_str("Muscle_Gain"),
            FocusLabel::GeneralFitness => f.write_str("General_Fitness"),
            FocusLabel::WeightLoss => f.write_str("Weight_Loss"),
            FocusLabel::Other(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// Physical profile and plan shape requested by the user
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub level: Level,
    pub workout_days: u32,
    pub exercises_per_day: u32,
    pub weight_kg: f64,
    pub height_m: f64,
}

impl UserProfile {
    pub const MAX_WORKOUT_DAYS: u32 = 7;
    pub const MAX_EXERCISES_PER_DAY: u32 = 10;

    /// Body mass index (kg / m²)
    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_m)
    }

    /// Check the documented input ranges
    ///
    /// Returns a list of problems, or empty Vec if the profile is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(1..=Self::MAX_WORKOUT_DAYS).contains(&self.workout_days) {
            errors.push(format!(
                "workout days must be between 1 and {}, got {}",
                Self::MAX_WORKOUT_DAYS,
                self.workout_days
            ));
        }
        if !(1..=Self::MAX_EXERCISES_PER_DAY).contains(&self.exercises_per_day) {
            errors.push(format!(
                "exercises per day must be between 1 and {}, got {}",
                Self::MAX_EXERCISES_PER_DAY,
                self.exercises_per_day
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            errors.push(format!("weight must be positive, got {}", self.weight_kg));
        }
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            errors.push(format!("height must be positive, got {}", self.height_m));
        }

        errors
    }
}

/// Body mass index from weight in kilograms and height in metres
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Default focus suggested by BMI alone, used when no classifier output is available
pub fn suggest_focus_from_bmi(bmi: f64) -> FocusLabel {
    if bmi < 18.5 {
        FocusLabel::MuscleGain
    } else if bmi >= 25.0 {
        FocusLabel::FatLoss
    } else {
        FocusLabel::GeneralFitness
    }
}

/// Obesity threshold above which no plan goal is suggested
pub const CONSULT_BMI_THRESHOLD: f64 = 30.0;

/// Plain-language fitness goal for a BMI value
pub fn fitness_goal_advice(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Gain weight and build muscle."
    } else if bmi < 25.0 {
        "Maintain a healthy weight and focus on overall fitness."
    } else if bmi < CONSULT_BMI_THRESHOLD {
        "Lose weight and improve cardiovascular health."
    } else {
        "Consult a healthcare professional for personalized advice."
    }
}

// ============================================================================
// Plan Types
// ============================================================================

/// An exercise placed into a plan day, with its prescription
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedExercise {
    #[serde(rename = "Exercise")]
    pub exercise: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "BodyPart")]
    pub body_part: String,
    #[serde(rename = "Sets")]
    pub sets: u32,
    #[serde(rename = "Reps")]
    pub reps: u32,
}

/// One labelled day of the plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanDay {
    pub label: String,
    pub exercises: Vec<PlannedExercise>,
}

/// Day-keyed workout plan; day order is insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutPlan {
    days: Vec<PlanDay>,
}

impl WorkoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used for the n-th day (1-based)
    pub fn day_label(day: u32) -> String {
        format!("Day {}", day)
    }

    pub fn push_day(&mut self, label: impl Into<String>, exercises: Vec<PlannedExercise>) {
        self.days.push(PlanDay {
            label: label.into(),
            exercises,
        });
    }

    pub fn days(&self) -> &[PlanDay] {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut [PlanDay] {
        &mut self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, label: &str) -> Option<&PlanDay> {
        self.days.iter().find(|d| d.label == label)
    }

    /// All planned exercises across the week, in day order
    pub fn exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }
}

impl Serialize for WorkoutPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label, &day.exercises)?;
        }
        map.end()
    }
}
