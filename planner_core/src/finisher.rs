//! Week-level finishing pass.
//!
//! Runs once after every day is composed and only ever adds exercises:
//! - Cardio when the week has none (front of a random day)
//! - Stretching when the week has none (second slot of a random day)
//! - One extra HIIT/cardio exercise when BMI >= 25 or the focus is fat loss

use crate::events::{Injection, PlanEvent, PlanObserver};
use crate::pool::ExercisePool;
use crate::prescription::plan_exercise;
use crate::{ExerciseCatalog, FocusLabel, PlannedExercise, UserProfile, WorkoutPlan};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// BMI at or above which extra conditioning is added
pub const CONDITIONING_BMI_THRESHOLD: f64 = 25.0;

/// Exercise types accepted for the extra conditioning slot
pub const CONDITIONING_TYPES: [&str; 2] = ["hiit", "cardio"];

/// Where injected exercises land in their day
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinisherPlacement {
    /// Cardio first, stretching second, conditioning last
    #[default]
    Literal,
    /// Every injection is appended
    Append,
}

impl FinisherPlacement {
    fn position(self, injection: Injection, day_len: usize) -> usize {
        match (self, injection) {
            (FinisherPlacement::Append, _) => day_len,
            (FinisherPlacement::Literal, Injection::Cardio) => 0,
            (FinisherPlacement::Literal, Injection::Stretching) => day_len.min(1),
            (FinisherPlacement::Literal, Injection::Conditioning) => day_len,
        }
    }
}

/// Patches a composed week
pub struct PlanFinisher<'a> {
    catalog: &'a ExerciseCatalog,
    profile: &'a UserProfile,
    focus: &'a FocusLabel,
    placement: FinisherPlacement,
}

impl<'a> PlanFinisher<'a> {
    pub fn new(
        catalog: &'a ExerciseCatalog,
        profile: &'a UserProfile,
        focus: &'a FocusLabel,
        placement: FinisherPlacement,
    ) -> Self {
        Self {
            catalog,
            profile,
            focus,
            placement,
        }
    }

    /// Whether the profile or focus calls for extra conditioning
    pub fn needs_conditioning(&self) -> bool {
        self.profile.bmi() >= CONDITIONING_BMI_THRESHOLD || *self.focus == FocusLabel::FatLoss
    }

    pub fn finish<R, O>(&self, plan: &mut WorkoutPlan, rng: &mut R, observer: &mut O)
    where
        R: Rng + ?Sized,
        O: PlanObserver + ?Sized,
    {
        if plan.is_empty() {
            return;
        }

        let types_in_plan: HashSet<String> = plan
            .exercises()
            .map(|ex| ex.kind.to_lowercase())
            .collect();
        let catalog_pool = ExercisePool::full(self.catalog);

        if !types_in_plan.contains("cardio") {
            let cardio = catalog_pool.of_kind("cardio");
            match cardio.choose_one(rng).and_then(|idx| self.catalog.get(idx)) {
                Some(record) => {
                    let day = rng.gen_range(0..plan.len());
                    let planned = plan_exercise(rng, &self.profile.level, record);
                    self.inject(plan, day, Injection::Cardio, planned, observer);
                }
                None => observer.on_event(PlanEvent::InjectionSkipped {
                    injection: Injection::Cardio,
                }),
            }
        }

        if !types_in_plan.contains("stretching") {
            let stretching = catalog_pool.of_kind("stretching");
            if stretching.is_empty() {
                observer.on_event(PlanEvent::InjectionSkipped {
                    injection: Injection::Stretching,
                });
            } else {
                let day = rng.gen_range(0..plan.len());
                let record = stretching
                    .choose_one(rng)
                    .and_then(|idx| self.catalog.get(idx));
                if let Some(record) = record {
                    let planned = plan_exercise(rng, &self.profile.level, record);
                    self.inject(plan, day, Injection::Stretching, planned, observer);
                }
            }
        }

        if self.needs_conditioning() {
            let conditioning = catalog_pool.of_kinds(&CONDITIONING_TYPES);
            match conditioning.choose_one(rng).and_then(|idx| self.catalog.get(idx)) {
                Some(record) => {
                    let day = rng.gen_range(0..plan.len());
                    let planned = plan_exercise(rng, &self.profile.level, record);
                    self.inject(plan, day, Injection::Conditioning, planned, observer);
                }
                None => observer.on_event(PlanEvent::InjectionSkipped {
                    injection: Injection::Conditioning,
                }),
            }
        }
    }

    fn inject<O>(
        &self,
        plan: &mut WorkoutPlan,
        day: usize,
        injection: Injection,
        planned: PlannedExercise,
        observer: &mut O,
    ) where
        O: PlanObserver + ?Sized,
    {
        let Some(target) = plan.days_mut().get_mut(day) else {
            return;
        };

        let position = self.placement.position(injection, target.exercises.len());
        observer.on_event(PlanEvent::Injected {
            injection,
            day: target.label.clone(),
            position,
            exercise: planned.exercise.clone(),
        });
        target.exercises.insert(position, planned);
    }
}
