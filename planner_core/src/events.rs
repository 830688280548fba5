//! Observable planning events.
//!
//! Fallbacks taken while building a plan are not errors, but they change the
//! shape of the result. Each one is reported to a `PlanObserver`.

use serde::Serialize;
use std::fmt;

/// Which finisher step injected (or failed to inject) an exercise
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Injection {
    Cardio,
    Stretching,
    Conditioning,
}

/// Why a body-part requirement was looked up
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartRequest {
    Focused,
    Essential,
}

/// Something noteworthy that happened while planning
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlanEvent {
    /// No catalog rows for the category; the full catalog was used instead
    TypePoolFallback { day: String, category: String },
    /// Excluding already-picked rows emptied the pool; the whole pool was reused
    ExclusionFallback { day: String, category: String },
    /// Pool smaller than the request; drew with replacement
    SampledWithReplacement {
        day: String,
        category: String,
        requested: usize,
        available: usize,
    },
    /// No candidate for a body part; requirement skipped
    BodyPartUnavailable {
        day: String,
        body_part: String,
        request: BodyPartRequest,
    },
    /// Essential body part backfilled from the catalog
    BodyPartBackfilled {
        day: String,
        body_part: String,
        exercise: String,
    },
    /// Finisher added an exercise
    Injected {
        injection: Injection,
        day: String,
        position: usize,
        exercise: String,
    },
    /// Finisher had no candidate and skipped its step
    InjectionSkipped { injection: Injection },
}

impl fmt::Display for PlanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanEvent::TypePoolFallback { day, category } => write!(
                f,
                "{}: no '{}' exercises in catalog, using full catalog",
                day, category
            ),
            PlanEvent::ExclusionFallback { day, category } => write!(
                f,
                "{}: '{}' pool exhausted by earlier picks, reusing whole pool",
                day, category
            ),
            PlanEvent::SampledWithReplacement {
                day,
                category,
                requested,
                available,
            } => write!(
                f,
                "{}: only {} '{}' candidates for {} picks, sampling with replacement",
                day, available, category, requested
            ),
            PlanEvent::BodyPartUnavailable {
                day,
                body_part,
                request,
            } => write!(
                f,
                "{}: no exercise for {:?} body part '{}', skipped",
                day, request, body_part
            ),
            PlanEvent::BodyPartBackfilled {
                day,
                body_part,
                exercise,
            } => write!(f, "{}: added '{}' to cover {}", day, exercise, body_part),
            PlanEvent::Injected {
                injection,
                day,
                position,
                exercise,
            } => write!(
                f,
                "{}: inserted {:?} exercise '{}' at position {}",
                day, injection, exercise, position
            ),
            PlanEvent::InjectionSkipped { injection } => {
                write!(f, "no {:?} exercise in catalog, step skipped", injection)
            }
        }
    }
}

/// Receiver for planning events
pub trait PlanObserver {
    fn on_event(&mut self, event: PlanEvent);
}

/// Observer that forwards events to `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl PlanObserver for TracingObserver {
    fn on_event(&mut self, event: PlanEvent) {
        match &event {
            PlanEvent::BodyPartBackfilled { .. } | PlanEvent::Injected { .. } => {
                tracing::debug!("{}", event);
            }
            _ => {
                tracing::info!("{}", event);
            }
        }
    }
}

/// Observer that keeps every event in order
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<PlanEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanObserver for RecordingObserver {
    fn on_event(&mut self, event: PlanEvent) {
        tracing::trace!("{}", event);
        self.events.push(event);
    }
}
