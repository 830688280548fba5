//! Weighted category universe for a plan.
//!
//! Each focus has a table of eligible categories. A preferred category gets
//! `PREFERRED_WEIGHT` while every other category keeps weight 1, so the
//! preference biases the daily draw without excluding the rest.

use crate::FocusLabel;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Weight given to the preferred category
pub const PREFERRED_WEIGHT: u32 = 3;

/// Preference value meaning "no preference"
pub const MIXED: &str = "Mixed";

/// Categories with sampling weights, in table order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryWeights {
    entries: Vec<(String, u32)>,
}

impl CategoryWeights {
    /// Equal weights over the given categories
    pub fn uniform(categories: &[&str]) -> Self {
        Self {
            entries: categories.iter().map(|c| (c.to_string(), 1)).collect(),
        }
    }

    /// Universe for a focus, biased toward `preferred` when it is one of the focus categories
    pub fn for_focus(focus: &FocusLabel, preferred: Option<&str>) -> Self {
        let mut weights = Self::uniform(focus.categories());

        if let Some(pref) = preferred.filter(|p| !p.eq_ignore_ascii_case(MIXED)) {
            let mut matched = false;
            for (category, weight) in &mut weights.entries {
                if category.eq_ignore_ascii_case(pref) {
                    *weight = PREFERRED_WEIGHT;
                    matched = true;
                }
            }
            if !matched {
                tracing::debug!(
                    "Preferred category '{}' is not part of {} categories, ignoring",
                    pref,
                    focus
                );
            }
        }

        weights
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Weight of a category (case-insensitive), 0 if absent
    pub fn weight_of(&self, category: &str) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(category))
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0)
    }

    /// Same universe without `category` (case-insensitive)
    pub fn without(&self, category: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(c, _)| !c.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
        }
    }

    /// Weighted draw of one category; `None` when the universe is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let dist = WeightedIndex::<u32>::new(self.entries.iter().map(|(_, w)| *w)).ok()?;
        Some(self.entries[dist.sample(rng)].0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn test_uniform_focus_weights() {
        let weights = CategoryWeights::for_focus(&FocusLabel::FatLoss, None);
        let categories: Vec<_> = weights.categories().collect();
        assert_eq!(
            categories,
            vec!["HIIT", "Cardio", "Strength", "Plyometrics", "Stretching"]
        );
        assert!(weights.entries().iter().all(|(_, w)| *w == 1));
    }

    #[test]
    fn test_preferred_category_is_tripled() {
        let weights = CategoryWeights::for_focus(&FocusLabel::FatLoss, Some("strength"));
        assert_eq!(weights.weight_of("Strength"), 3);
        assert_eq!(weights.weight_of("Cardio"), 1);
        assert_eq!(weights.weight_of("Balance"), 0);
    }

    #[test]
    fn test_mixed_and_unknown_preferences_leave_weights_alone() {
        let base = CategoryWeights::for_focus(&FocusLabel::MuscleGain, None);
        assert_eq!(
            CategoryWeights::for_focus(&FocusLabel::MuscleGain, Some("Mixed")),
            base
        );
        assert_eq!(
            CategoryWeights::for_focus(&FocusLabel::MuscleGain, Some("Cardio")),
            base
        );
    }

    #[test]
    fn test_without_is_case_insensitive() {
        let weights = CategoryWeights::for_focus(&FocusLabel::GeneralFitness, None);
        let rest = weights.without("cardio");
        assert_eq!(rest.weight_of("Cardio"), 0);
        assert_eq!(rest.entries().len(), 4);
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let weights = CategoryWeights::uniform(&["Strength"]).without("Strength");
        assert!(weights.is_empty());
        assert_eq!(weights.choose(&mut seeded_rng(5)), None);
    }

    #[test]
    fn test_preferred_category_is_drawn_more_often() {
        let weights = CategoryWeights::for_focus(&FocusLabel::FatLoss, Some("HIIT"));
        let mut rng = seeded_rng(21);

        let draws = 7000;
        let hiit = (0..draws)
            .filter(|_| weights.choose(&mut rng) == Some("HIIT"))
            .count();

        // Expected share is 3/7
        let share = hiit as f64 / draws as f64;
        assert!((share - 3.0 / 7.0).abs() < 0.05, "HIIT share was {}", share);
    }
}
