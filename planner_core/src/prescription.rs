//! Sets and reps prescription.
//!
//! Ranges are keyed by experience level and, for reps, by the family of the
//! exercise type:
//! - Strength family (strength, powerlifting, olympic weightlifting,
//!   strongman, plyometrics) uses lower rep ranges
//! - Everything else is treated as endurance work

use crate::{ExerciseRecord, Level, PlannedExercise};
use rand::Rng;
use std::ops::RangeInclusive;

/// Exercise types prescribed with the lower rep ranges
pub const STRENGTH_FAMILY: [&str; 5] = [
    "strength",
    "powerlifting",
    "olympic weightlifting",
    "strongman",
    "plyometrics",
];

/// Rep-range family of an exercise type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepFamily {
    Strength,
    Endurance,
}

impl RepFamily {
    /// Classify an exercise type (case-insensitive)
    pub fn of(exercise_type: &str) -> Self {
        let lowered = exercise_type.to_lowercase();
        if STRENGTH_FAMILY.contains(&lowered.as_str()) {
            RepFamily::Strength
        } else {
            RepFamily::Endurance
        }
    }
}

/// Inclusive set range for a level
pub fn sets_range(level: &Level) -> RangeInclusive<u32> {
    match level {
        Level::Beginner => 3..=4,
        Level::Intermediate => 3..=5,
        Level::Advanced => 4..=6,
        Level::Other(_) => 3..=4,
    }
}

/// Inclusive rep range for a level and rep family
pub fn reps_range(level: &Level, family: RepFamily) -> RangeInclusive<u32> {
    match (family, level) {
        (RepFamily::Strength, Level::Beginner) => 8..=10,
        (RepFamily::Strength, Level::Intermediate) => 10..=12,
        (RepFamily::Strength, Level::Advanced) => 12..=15,
        (RepFamily::Endurance, Level::Beginner) => 12..=15,
        (RepFamily::Endurance, Level::Intermediate) => 15..=18,
        (RepFamily::Endurance, Level::Advanced) => 18..=22,
        (_, Level::Other(_)) => 10..=15,
    }
}

/// Draw a set count for the level
pub fn determine_sets<R: Rng + ?Sized>(rng: &mut R, level: &Level) -> u32 {
    rng.gen_range(sets_range(level))
}

/// Draw a rep count for the level and exercise type
pub fn determine_reps<R: Rng + ?Sized>(rng: &mut R, level: &Level, exercise_type: &str) -> u32 {
    rng.gen_range(reps_range(level, RepFamily::of(exercise_type)))
}

/// Draw (sets, reps), sets first
pub fn prescribe<R: Rng + ?Sized>(rng: &mut R, level: &Level, exercise_type: &str) -> (u32, u32) {
    let sets = determine_sets(rng, level);
    let reps = determine_reps(rng, level, exercise_type);
    (sets, reps)
}

/// Attach a fresh prescription to a catalog record
pub fn plan_exercise<R: Rng + ?Sized>(
    rng: &mut R,
    level: &Level,
    record: &ExerciseRecord,
) -> PlannedExercise {
    let (sets, reps) = prescribe(rng, level, &record.kind);
    PlannedExercise {
        exercise: record.title.clone(),
        kind: record.kind.clone(),
        body_part: record.body_part.clone(),
        sets,
        reps,
    }
}
