use chrono::{Datelike, NaiveDate};

use crate::model::{Category, Challenge};

/// Fixed category rotation walked by the selector. The starting point shifts
/// with the day of year so every day leads with a different category.
pub const CATEGORY_ROTATION: [Category; 6] = [
    Category::Water,
    Category::Energy,
    Category::Waste,
    Category::Transport,
    Category::Food,
    Category::Lifestyle,
];

/// Picks today's challenges from the static catalog: same date + same catalog
/// always yields the same sequence, with no persisted state behind it.
///
/// The day-specific shuffle uses a deliberately weak hash of the first id
/// byte; ties keep catalog order (stable sort). A rotation pass takes at most
/// one challenge per category, then remaining slots fill from the shuffled
/// order. Returns `min(count, catalog.len())` items and never mutates the
/// catalog.
pub fn select_daily(date: NaiveDate, catalog: &[Challenge], count: usize) -> Vec<&Challenge> {
    let day_of_year = date.ordinal0();

    let mut shuffled: Vec<&Challenge> = catalog.iter().collect();
    shuffled.sort_by_key(|c| shuffle_key(c, day_of_year));

    let mut selected: Vec<&Challenge> = Vec::with_capacity(count.min(catalog.len()));

    // One pass over the rotation, at most one pick per target category.
    for i in 0..count {
        let target = CATEGORY_ROTATION[(day_of_year as usize + i) % CATEGORY_ROTATION.len()];
        let pick = shuffled
            .iter()
            .find(|c| c.category == target && !selected.iter().any(|s| s.id == c.id));
        if let Some(c) = pick {
            selected.push(c);
        }
    }

    // Fill any slots left by exhausted categories.
    for c in &shuffled {
        if selected.len() >= count {
            break;
        }
        if !selected.iter().any(|s| s.id == c.id) {
            selected.push(c);
        }
    }

    selected
}

fn shuffle_key(challenge: &Challenge, day_of_year: u32) -> u32 {
    let first = challenge.id.as_bytes().first().copied().unwrap_or(0) as u32;
    (first * day_of_year) % 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use std::collections::HashSet;

    fn challenge(id: &str, category: Category) -> Challenge {
        Challenge {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            tip: String::new(),
            category,
            xp_reward: 10,
            difficulty: Difficulty::Easy,
            impact_metric: String::new(),
        }
    }

    fn catalog() -> Vec<Challenge> {
        vec![
            challenge("shorter_shower", Category::Water),
            challenge("turn_off_tap", Category::Water),
            challenge("unplug_devices", Category::Energy),
            challenge("natural_light", Category::Energy),
            challenge("zero_plastic", Category::Waste),
            challenge("walk_errands", Category::Transport),
            challenge("meatless_meal", Category::Food),
            challenge("eco_learning", Category::Lifestyle),
        ]
    }

    #[test]
    fn same_date_same_catalog_is_deterministic() {
        let catalog = catalog();
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let a: Vec<&str> = select_daily(date, &catalog, 3)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let b: Vec<&str> = select_daily(date, &catalog, 3)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_days_can_rotate_categories() {
        let catalog = catalog();
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        let first_of = |date| select_daily(date, &catalog, 1)[0].category;
        // Rotation start moves with the day of year, so consecutive days lead
        // with different categories.
        assert_ne!(first_of(d1), first_of(d2));
    }

    #[test]
    fn no_duplicate_categories_within_rotation_reach() {
        let catalog = catalog();
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let picked = select_daily(date, &catalog, 6);
        let categories: HashSet<_> = picked.iter().map(|c| c.category.label()).collect();
        assert_eq!(categories.len(), picked.len());
    }

    #[test]
    fn never_returns_the_same_item_twice() {
        let catalog = catalog();
        let date = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        let picked = select_daily(date, &catalog, 8);
        let ids: HashSet<_> = picked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), picked.len());
    }

    #[test]
    fn result_length_is_min_of_count_and_catalog() {
        let catalog = catalog();
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(select_daily(date, &catalog, 3).len(), 3);
        assert_eq!(select_daily(date, &catalog, 0).len(), 0);
        assert_eq!(select_daily(date, &catalog, 50).len(), catalog.len());
    }

    #[test]
    fn empty_catalog_yields_empty_selection() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(select_daily(date, &[], 3).is_empty());
    }

    #[test]
    fn exhausted_category_falls_back_to_shuffled_order() {
        // Catalog with a single category: the rotation pass finds at most one
        // match, the fill pass must still deliver the rest.
        let catalog = vec![
            challenge("a_water", Category::Water),
            challenge("b_water", Category::Water),
            challenge("c_water", Category::Water),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        assert_eq!(select_daily(date, &catalog, 3).len(), 3);
    }
}
