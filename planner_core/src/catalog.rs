//! Exercise catalog: loading, validation and the built-in default set.
//!
//! The catalog is an ordered, read-only list of exercise records. Positions
//! in the list identify records for the pool selector.

use crate::{Error, ExerciseRecord, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Columns every catalog source must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["Title", "Type", "BodyPart"];

/// Ordered collection of exercise records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseCatalog {
    records: Vec<ExerciseRecord>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached built-in catalog
pub fn default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

impl ExerciseCatalog {
    pub fn new(records: Vec<ExerciseRecord>) -> Self {
        Self { records }
    }

    /// Load a catalog from a CSV file with at least Title, Type and BodyPart columns
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} exercises from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Load a catalog from any CSV source
    ///
    /// Extra columns are ignored. Missing required columns are a catalog
    /// validation error rather than a per-row deserialization failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(Error::CatalogValidation(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: ExerciseRecord = row?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ExerciseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record has the given type (case-insensitive)
    pub fn has_kind(&self, kind: &str) -> bool {
        self.records.iter().any(|r| r.is_kind(kind))
    }

    /// Whether any record targets the given body part (case-insensitive)
    pub fn has_body_part(&self, body_part: &str) -> bool {
        self.records.iter().any(|r| r.targets(body_part))
    }

    /// Number of records per exercise type, keyed by lowercase type
    pub fn type_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.kind.to_lowercase()).or_insert(0) += 1;
        }
        counts
    }

    /// Validate the catalog for completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.records.is_empty() {
            errors.push("Catalog has no exercises".to_string());
        }

        for (idx, record) in self.records.iter().enumerate() {
            if record.title.is_empty() {
                errors.push(format!("Row {} has empty Title", idx + 1));
            }
            if record.kind.is_empty() {
                errors.push(format!("Row {} ('{}') has empty Type", idx + 1, record.title));
            }
            if record.body_part.is_empty() {
                errors.push(format!(
                    "Row {} ('{}') has empty BodyPart",
                    idx + 1,
                    record.title
                ));
            }
        }

        errors
    }
}

/// Builds the built-in catalog
///
/// Covers every focus category and every essential body part so that a plan
/// can be generated without an external dataset.
pub fn build_default_catalog() -> ExerciseCatalog {
    let rows: &[(&str, &str, &str)] = &[
        // Strength
        ("Barbell Bench Press", "Strength", "Chest"),
        ("Incline Dumbbell Press", "Strength", "Chest"),
        ("Push-up", "Strength", "Chest"),
        ("Bent-Over Barbell Row", "Strength", "Back"),
        ("Pull-up", "Strength", "Back"),
        ("Seated Cable Row", "Strength", "Back"),
        ("Back Squat", "Strength", "Legs"),
        ("Walking Lunge", "Strength", "Legs"),
        ("Romanian Deadlift", "Strength", "Hamstrings"),
        ("Overhead Press", "Strength", "Shoulders"),
        ("Lateral Raise", "Strength", "Shoulders"),
        ("Plank", "Strength", "Core"),
        ("Hanging Leg Raise", "Strength", "Core"),
        ("Barbell Curl", "Strength", "Biceps"),
        ("Triceps Dip", "Strength", "Triceps"),
        ("Hip Thrust", "Strength", "Glutes"),
        // Powerlifting / Olympic / Strongman
        ("Conventional Deadlift", "Powerlifting", "Back"),
        ("Low-Bar Squat", "Powerlifting", "Legs"),
        ("Competition Bench Press", "Powerlifting", "Chest"),
        ("Power Clean", "Olympic Weightlifting", "Legs"),
        ("Snatch", "Olympic Weightlifting", "Shoulders"),
        ("Clean and Jerk", "Olympic Weightlifting", "Shoulders"),
        ("Farmer's Walk", "Strongman", "Forearms"),
        ("Atlas Stone Lift", "Strongman", "Back"),
        ("Log Press", "Strongman", "Shoulders"),
        // Plyometrics
        ("Box Jump", "Plyometrics", "Legs"),
        ("Plyo Push-up", "Plyometrics", "Chest"),
        ("Broad Jump", "Plyometrics", "Quadriceps"),
        // Cardio / HIIT
        ("Treadmill Run", "Cardio", "Legs"),
        ("Rowing Machine", "Cardio", "Back"),
        ("Jump Rope", "Cardio", "Calves"),
        ("Stationary Bike", "Cardio", "Quadriceps"),
        ("Burpee", "HIIT", "Full Body"),
        ("Mountain Climber", "HIIT", "Core"),
        ("Kettlebell Swing", "HIIT", "Glutes"),
        ("Battle Rope Slams", "HIIT", "Shoulders"),
        // Circuit training
        ("Bodyweight Circuit", "Circuit Training", "Full Body"),
        ("Dumbbell Complex", "Circuit Training", "Shoulders"),
        // Stretching / Flexibility / Balance
        ("Hamstring Stretch", "Stretching", "Hamstrings"),
        ("Doorway Chest Stretch", "Stretching", "Chest"),
        ("Child's Pose", "Stretching", "Lower Back"),
        ("Cat-Cow", "Flexibility", "Back"),
        ("World's Greatest Stretch", "Flexibility", "Legs"),
        ("Single-Leg Balance Reach", "Balance", "Legs"),
        ("Bosu Ball Plank", "Balance", "Core"),
    ];

    ExerciseCatalog::new(
        rows.iter()
            .map(|(title, kind, body_part)| ExerciseRecord::new(*title, *kind, *body_part))
            .collect(),
    )
}
