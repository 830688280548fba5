#![forbid(unsafe_code)]

//! Core domain model and plan generation for the workout planner.
//!
//! This crate provides:
//! - Domain types (exercise records, profiles, planned exercises, plans)
//! - Exercise catalog loading and the built-in catalog
//! - Sets/reps prescription policy
//! - Pool selection, day composition and the week finisher
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod events;
pub mod prescription;
pub mod pool;
pub mod weights;
pub mod composer;
pub mod finisher;
pub mod preferences;
pub mod planner;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{default_catalog, ExerciseCatalog};
pub use config::Config;
pub use events::{PlanEvent, PlanObserver, RecordingObserver, TracingObserver};
pub use composer::ESSENTIAL_BODY_PARTS;
pub use finisher::FinisherPlacement;
pub use weights::CategoryWeights;
pub use planner::{entropy_rng, seeded_rng, PlanRequest, PlanRng, Planner};
