//! Plan generation entry point.
//!
//! Generation is a fixed pipeline: validate input, compose each day in
//! order, then run the finisher once over the whole week. Every random draw
//! comes from the generator handed in by the caller, so a seeded generator
//! reproduces the same plan.

use crate::composer::DayComposer;
use crate::events::{PlanObserver, TracingObserver};
use crate::finisher::{FinisherPlacement, PlanFinisher};
use crate::weights::CategoryWeights;
use crate::{Error, ExerciseCatalog, FocusLabel, Result, UserProfile, WorkoutPlan};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used for reproducible plans
pub type PlanRng = ChaCha8Rng;

/// Generator seeded from a fixed value
pub fn seeded_rng(seed: u64) -> PlanRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from system entropy
pub fn entropy_rng() -> PlanRng {
    ChaCha8Rng::from_entropy()
}

/// Everything the caller supplies for one plan
#[derive(Clone, Debug)]
pub struct PlanRequest {
    pub focus: FocusLabel,
    pub profile: UserProfile,
    /// Category to favour; `None` or "Mixed" for no preference
    pub preferred_category: Option<String>,
    /// Body parts to emphasise, in priority order
    pub focused_body_parts: Vec<String>,
}

impl PlanRequest {
    pub fn new(focus: FocusLabel, profile: UserProfile) -> Self {
        Self {
            focus,
            profile,
            preferred_category: None,
            focused_body_parts: Vec::new(),
        }
    }

    pub fn with_preferred_category(mut self, category: impl Into<String>) -> Self {
        self.preferred_category = Some(category.into());
        self
    }

    pub fn with_focused_body_parts(mut self, body_parts: Vec<String>) -> Self {
        self.focused_body_parts = body_parts;
        self
    }
}

/// Generates workout plans from one catalog
#[derive(Clone, Debug)]
pub struct Planner<'a> {
    catalog: &'a ExerciseCatalog,
    placement: FinisherPlacement,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self {
            catalog,
            placement: FinisherPlacement::default(),
        }
    }

    pub fn with_placement(mut self, placement: FinisherPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Generate a plan, reporting fallbacks to `observer`
    ///
    /// Fails only when the request breaks the input contract: profile out of
    /// range or an empty catalog.
    pub fn generate<R, O>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<WorkoutPlan>
    where
        R: Rng + ?Sized,
        O: PlanObserver + ?Sized,
    {
        let problems = request.profile.validate();
        if !problems.is_empty() {
            return Err(Error::InvalidInput(problems.join("; ")));
        }
        if self.catalog.is_empty() {
            return Err(Error::InvalidInput("exercise catalog is empty".into()));
        }

        let weights =
            CategoryWeights::for_focus(&request.focus, request.preferred_category.as_deref());

        tracing::info!(
            "Generating {}-day plan for focus {} ({} exercises/day, level {})",
            request.profile.workout_days,
            request.focus,
            request.profile.exercises_per_day,
            request.profile.level
        );

        let composer = DayComposer::new(
            self.catalog,
            &request.profile,
            &weights,
            &request.focused_body_parts,
        );

        let mut plan = WorkoutPlan::new();
        for day in 1..=request.profile.workout_days {
            let label = WorkoutPlan::day_label(day);
            let exercises = composer.compose_day(&label, rng, observer);
            plan.push_day(label, exercises);
        }

        PlanFinisher::new(self.catalog, &request.profile, &request.focus, self.placement)
            .finish(&mut plan, rng, observer);

        tracing::info!(
            "Generated plan with {} exercises across {} days",
            plan.exercises().count(),
            plan.len()
        );

        Ok(plan)
    }

    /// Generate a reproducible plan from a seed, logging fallbacks through `tracing`
    pub fn generate_seeded(&self, request: &PlanRequest, seed: u64) -> Result<WorkoutPlan> {
        let mut rng = seeded_rng(seed);
        self.generate(request, &mut rng, &mut TracingObserver)
    }
}
