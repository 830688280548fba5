//! User preference parsing.
//!
//! Validates the optional preferred workout type and the list of body parts
//! to emphasise before they reach the planner.

use crate::{Error, Result};

/// Accepted values for the preferred workout type
pub const PREFERRED_WORKOUT_OPTIONS: [&str; 9] = [
    "Mixed",
    "Cardio",
    "HIIT",
    "Strength",
    "Plyometrics",
    "Stretching",
    "Powerlifting",
    "Olympic Weightlifting",
    "Strongman",
];

/// Body parts a user may ask to emphasise
pub const ALLOWED_BODY_PARTS: [&str; 18] = [
    "Abdominals",
    "Adductors",
    "Abductors",
    "Biceps",
    "Calves",
    "Chest",
    "Forearms",
    "Glutes",
    "Hamstrings",
    "Lats",
    "Lower Back",
    "Middle Back",
    "Traps",
    "Neck",
    "Quadriceps",
    "Shoulders",
    "Triceps",
    "Full Body",
];

/// Shorthand that expands to every other allowed body part
pub const FULL_BODY: &str = "Full Body";

fn canonical<'a>(options: &[&'a str], value: &str) -> Option<&'a str> {
    options
        .iter()
        .copied()
        .find(|opt| opt.eq_ignore_ascii_case(value.trim()))
}

/// Parse a preferred workout type
///
/// Returns `None` for "Mixed" (no preference) and the canonical spelling otherwise.
pub fn parse_preferred_category(value: &str) -> Result<Option<String>> {
    match canonical(&PREFERRED_WORKOUT_OPTIONS, value) {
        Some(opt) if opt.eq_ignore_ascii_case(crate::weights::MIXED) => Ok(None),
        Some(opt) => Ok(Some(opt.to_string())),
        None => Err(Error::InvalidInput(format!(
            "unknown workout type '{}' (choose from: {})",
            value.trim(),
            PREFERRED_WORKOUT_OPTIONS.join(", ")
        ))),
    }
}

/// Validate focused body parts and expand "Full Body"
///
/// Blank entries are dropped. Order is kept, so earlier entries are picked first.
pub fn expand_focused_body_parts<S: AsRef<str>>(values: &[S]) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    let mut full_body = false;

    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        match canonical(&ALLOWED_BODY_PARTS, value) {
            Some(FULL_BODY) => full_body = true,
            Some(part) => parts.push(part.to_string()),
            None => {
                return Err(Error::InvalidInput(format!(
                    "unknown body part '{}' (choose from: {})",
                    value,
                    ALLOWED_BODY_PARTS.join(", ")
                )))
            }
        }
    }

    if full_body {
        return Ok(ALLOWED_BODY_PARTS
            .iter()
            .filter(|part| **part != FULL_BODY)
            .map(|part| part.to_string())
            .collect());
    }

    Ok(parts)
}
