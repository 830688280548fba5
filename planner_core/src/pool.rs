//! Exercise pool selection and sampling.
//!
//! A pool is a set of catalog positions. Working with positions rather than
//! cloned records keeps "already picked" exclusion tied to row identity, so
//! two catalog rows with identical text are still distinct candidates.

use crate::{ExerciseCatalog, ExerciseRecord};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Subset of a catalog, in catalog order
#[derive(Clone, Debug)]
pub struct ExercisePool<'a> {
    catalog: &'a ExerciseCatalog,
    indices: Vec<usize>,
}

/// Result of drawing from a pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub picks: Vec<usize>,
    /// Pool was smaller than the request, so picks may repeat
    pub with_replacement: bool,
}

impl<'a> ExercisePool<'a> {
    /// Every row of the catalog
    pub fn full(catalog: &'a ExerciseCatalog) -> Self {
        Self {
            catalog,
            indices: (0..catalog.len()).collect(),
        }
    }

    fn filtered(&self, keep: impl Fn(&ExerciseRecord) -> bool) -> Self {
        Self {
            catalog: self.catalog,
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&i| keep(&self.catalog.records()[i]))
                .collect(),
        }
    }

    /// Rows whose type equals `kind` (case-insensitive)
    pub fn of_kind(&self, kind: &str) -> Self {
        self.filtered(|r| r.is_kind(kind))
    }

    /// Rows whose type is any of `kinds` (case-insensitive)
    pub fn of_kinds(&self, kinds: &[&str]) -> Self {
        self.filtered(|r| kinds.iter().any(|k| r.is_kind(k)))
    }

    /// Rows targeting `body_part` (case-insensitive)
    pub fn targeting(&self, body_part: &str) -> Self {
        self.filtered(|r| r.targets(body_part))
    }

    /// Rows not in `picked`
    pub fn excluding(&self, picked: &[usize]) -> Self {
        Self {
            catalog: self.catalog,
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|i| !picked.contains(i))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn catalog(&self) -> &'a ExerciseCatalog {
        self.catalog
    }

    pub fn records(&self) -> impl Iterator<Item = &'a ExerciseRecord> + '_ {
        let catalog = self.catalog;
        self.indices.iter().map(move |&i| &catalog.records()[i])
    }

    /// Draw `n` rows: distinct when the pool is large enough, with replacement otherwise
    ///
    /// An empty pool yields no picks.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Sample {
        if n == 0 || self.indices.is_empty() {
            return Sample {
                picks: Vec::new(),
                with_replacement: false,
            };
        }

        if self.indices.len() >= n {
            let picks = index::sample(rng, self.indices.len(), n)
                .into_iter()
                .map(|pos| self.indices[pos])
                .collect();
            Sample {
                picks,
                with_replacement: false,
            }
        } else {
            let picks = (0..n)
                .map(|_| self.indices[rng.gen_range(0..self.indices.len())])
                .collect();
            Sample {
                picks,
                with_replacement: true,
            }
        }
    }

    /// Draw a single row, if any
    pub fn choose_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.indices.choose(rng).copied()
    }
}

/// Rows of the catalog whose type equals `type_filter` (case-insensitive)
///
/// The result may be empty; callers fall back to the full catalog.
pub fn select_pool<'a>(catalog: &'a ExerciseCatalog, type_filter: &str) -> ExercisePool<'a> {
    ExercisePool::full(catalog).of_kind(type_filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;
    use std::collections::HashSet;

    fn sample_catalog() -> ExerciseCatalog {
        ExerciseCatalog::new(vec![
            ExerciseRecord::new("Run", "Cardio", "Legs"),
            ExerciseRecord::new("Bike", "cardio", "Quadriceps"),
            ExerciseRecord::new("Bench", "Strength", "Chest"),
            ExerciseRecord::new("Row", "Strength", "Back"),
            ExerciseRecord::new("Squat", "STRENGTH", "legs"),
            ExerciseRecord::new("Hamstring Stretch", "Stretching", "Hamstrings"),
        ])
    }

    #[test]
    fn test_select_pool_is_case_insensitive() {
        let catalog = sample_catalog();
        let pool = select_pool(&catalog, "strength");
        assert_eq!(pool.indices(), &[2, 3, 4]);

        let pool = select_pool(&catalog, "CARDIO");
        assert_eq!(pool.indices(), &[0, 1]);
    }

    #[test]
    fn test_select_pool_without_match_is_empty() {
        let catalog = sample_catalog();
        assert!(select_pool(&catalog, "Strongman").is_empty());
    }

    #[test]
    fn test_targeting_and_excluding() {
        let catalog = sample_catalog();
        let legs = ExercisePool::full(&catalog).targeting("LEGS");
        assert_eq!(legs.indices(), &[0, 4]);
        assert_eq!(legs.excluding(&[0]).indices(), &[4]);
        assert!(legs.excluding(&[0, 4]).is_empty());
    }

    #[test]
    fn test_of_kinds() {
        let catalog = sample_catalog();
        let pool = ExercisePool::full(&catalog).of_kinds(&["hiit", "cardio"]);
        assert_eq!(pool.indices(), &[0, 1]);
    }

    #[test]
    fn test_sample_without_replacement_is_distinct() {
        let catalog = sample_catalog();
        let pool = ExercisePool::full(&catalog);
        let mut rng = seeded_rng(1);

        for _ in 0..50 {
            let sample = pool.sample(&mut rng, 6);
            assert!(!sample.with_replacement);
            let unique: HashSet<_> = sample.picks.iter().collect();
            assert_eq!(unique.len(), 6);
        }
    }

    #[test]
    fn test_sample_with_replacement_when_scarce() {
        let catalog = sample_catalog();
        let pool = select_pool(&catalog, "cardio");
        let mut rng = seeded_rng(2);

        let sample = pool.sample(&mut rng, 5);
        assert!(sample.with_replacement);
        assert_eq!(sample.picks.len(), 5);
        assert!(sample.picks.iter().all(|i| *i == 0 || *i == 1));
    }

    #[test]
    fn test_sample_zero_and_empty() {
        let catalog = sample_catalog();
        let mut rng = seeded_rng(3);

        assert!(ExercisePool::full(&catalog).sample(&mut rng, 0).picks.is_empty());
        assert!(select_pool(&catalog, "Balance").sample(&mut rng, 3).picks.is_empty());
        assert_eq!(select_pool(&catalog, "Balance").choose_one(&mut rng), None);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let catalog = sample_catalog();
        let pool = ExercisePool::full(&catalog);

        let a = pool.sample(&mut seeded_rng(99), 4);
        let b = pool.sample(&mut seeded_rng(99), 4);
        assert_eq!(a, b);
    }
}
