//! Day composition.
//!
//! One day is built in three passes:
//! 1. Pick a primary and a secondary category from the weighted universe
//! 2. Select records: focused body parts, then primary fill, then secondary fill
//! 3. Backfill essential body parts from the whole catalog

use crate::events::{BodyPartRequest, PlanEvent, PlanObserver};
use crate::pool::{select_pool, ExercisePool};
use crate::prescription::plan_exercise;
use crate::weights::CategoryWeights;
use crate::{ExerciseCatalog, ExerciseRecord, PlannedExercise, UserProfile};
use rand::Rng;
use std::collections::HashSet;

/// Body parts every day must cover, in backfill order
pub const ESSENTIAL_BODY_PARTS: [&str; 5] = ["Chest", "Back", "Legs", "Shoulders", "Core"];

/// Split a day into (primary, secondary) counts
///
/// Primary gets 70% of the day rounded half-up, and never less than one.
pub fn split_counts(exercises_per_day: usize) -> (usize, usize) {
    let primary = ((exercises_per_day * 7 + 5) / 10).max(1);
    (primary, exercises_per_day.saturating_sub(primary))
}

/// Builds the exercise list for individual days
pub struct DayComposer<'a> {
    catalog: &'a ExerciseCatalog,
    profile: &'a UserProfile,
    weights: &'a CategoryWeights,
    focused_body_parts: &'a [String],
}

impl<'a> DayComposer<'a> {
    pub fn new(
        catalog: &'a ExerciseCatalog,
        profile: &'a UserProfile,
        weights: &'a CategoryWeights,
        focused_body_parts: &'a [String],
    ) -> Self {
        Self {
            catalog,
            profile,
            weights,
            focused_body_parts,
        }
    }

    /// Compose one day, including the essential body-part backfill
    pub fn compose_day<R, O>(
        &self,
        day: &str,
        rng: &mut R,
        observer: &mut O,
    ) -> Vec<PlannedExercise>
    where
        R: Rng + ?Sized,
        O: PlanObserver + ?Sized,
    {
        let records = self.select_records(day, rng, observer);

        let mut exercises = Vec::with_capacity(records.len());
        for record in records {
            exercises.push(plan_exercise(rng, &self.profile.level, record));
        }

        self.backfill_essentials(day, &mut exercises, rng, observer);

        tracing::debug!("{}: composed {} exercises", day, exercises.len());
        exercises
    }

    /// Base selection for a day, before prescriptions and backfill
    ///
    /// Order is focused picks, then primary picks, then secondary picks, with
    /// exact duplicates removed and the list cut to the per-day count.
    pub fn select_records<R, O>(
        &self,
        day: &str,
        rng: &mut R,
        observer: &mut O,
    ) -> Vec<&'a ExerciseRecord>
    where
        R: Rng + ?Sized,
        O: PlanObserver + ?Sized,
    {
        let primary_type = self.weights.choose(rng).unwrap_or_default().to_string();
        let secondary_type = self
            .weights
            .without(&primary_type)
            .choose(rng)
            .map(str::to_string)
            .unwrap_or_else(|| primary_type.clone());

        tracing::debug!(
            "{}: primary category '{}', secondary category '{}'",
            day,
            primary_type,
            secondary_type
        );

        let per_day = self.profile.exercises_per_day as usize;
        let (primary_count, secondary_count) = split_counts(per_day);

        let primary_pool = self.type_pool(day, &primary_type, observer);
        let secondary_pool = if secondary_type == primary_type {
            primary_pool.clone()
        } else {
            self.type_pool(day, &secondary_type, observer)
        };

        let mut picked: Vec<usize> = Vec::new();

        for body_part in self.focused_body_parts {
            match primary_pool.targeting(body_part).choose_one(rng) {
                Some(idx) => picked.push(idx),
                None => observer.on_event(PlanEvent::BodyPartUnavailable {
                    day: day.to_string(),
                    body_part: body_part.clone(),
                    request: BodyPartRequest::Focused,
                }),
            }
        }

        let primary_picks = fill(
            &primary_pool,
            &picked,
            primary_count,
            day,
            &primary_type,
            rng,
            observer,
        );
        picked.extend(primary_picks);

        let secondary_picks = fill(
            &secondary_pool,
            &picked,
            secondary_count,
            day,
            &secondary_type,
            rng,
            observer,
        );
        picked.extend(secondary_picks);

        let mut seen = HashSet::new();
        picked
            .into_iter()
            .filter_map(|idx| self.catalog.get(idx))
            .filter(|record| seen.insert(*record))
            .take(per_day)
            .collect()
    }

    /// Catalog rows of a category, or the whole catalog when there are none
    fn type_pool<O>(&self, day: &str, category: &str, observer: &mut O) -> ExercisePool<'a>
    where
        O: PlanObserver + ?Sized,
    {
        let pool = select_pool(self.catalog, category);
        if pool.is_empty() {
            observer.on_event(PlanEvent::TypePoolFallback {
                day: day.to_string(),
                category: category.to_string(),
            });
            ExercisePool::full(self.catalog)
        } else {
            pool
        }
    }

    /// Append one catalog exercise for each essential body part the day lacks
    fn backfill_essentials<R, O>(
        &self,
        day: &str,
        exercises: &mut Vec<PlannedExercise>,
        rng: &mut R,
        observer: &mut O,
    ) where
        R: Rng + ?Sized,
        O: PlanObserver + ?Sized,
    {
        let covered: HashSet<String> = exercises
            .iter()
            .map(|ex| ex.body_part.to_lowercase())
            .collect();

        let catalog_pool = ExercisePool::full(self.catalog);

        for body_part in ESSENTIAL_BODY_PARTS {
            if covered.contains(&body_part.to_lowercase()) {
                continue;
            }

            let record = catalog_pool
                .targeting(body_part)
                .choose_one(rng)
                .and_then(|idx| self.catalog.get(idx));

            match record {
                Some(record) => {
                    let planned = plan_exercise(rng, &self.profile.level, record);
                    observer.on_event(PlanEvent::BodyPartBackfilled {
                        day: day.to_string(),
                        body_part: body_part.to_string(),
                        exercise: planned.exercise.clone(),
                    });
                    exercises.push(planned);
                }
                None => observer.on_event(PlanEvent::BodyPartUnavailable {
                    day: day.to_string(),
                    body_part: body_part.to_string(),
                    request: BodyPartRequest::Essential,
                }),
            }
        }
    }
}

/// Draw `count` rows from `pool`, avoiding rows already picked for the day
///
/// If every row is already picked, the whole pool is used again.
fn fill<R, O>(
    pool: &ExercisePool<'_>,
    picked: &[usize],
    count: usize,
    day: &str,
    category: &str,
    rng: &mut R,
    observer: &mut O,
) -> Vec<usize>
where
    R: Rng + ?Sized,
    O: PlanObserver + ?Sized,
{
    if count == 0 {
        return Vec::new();
    }

    let mut remaining = pool.excluding(picked);
    if remaining.is_empty() {
        observer.on_event(PlanEvent::ExclusionFallback {
            day: day.to_string(),
            category: category.to_string(),
        });
        remaining = pool.clone();
    }

    let sample = remaining.sample(rng, count);
    if sample.with_replacement {
        observer.on_event(PlanEvent::SampledWithReplacement {
            day: day.to_string(),
            category: category.to_string(),
            requested: count,
            available: remaining.len(),
        });
    }
    sample.picks
}
