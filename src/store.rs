use crate::models::{AppData, Habit};
use crate::streaks;
use chrono::{NaiveDate, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    EmptyName,
    EmptyCategory,
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::EmptyCategory => write!(f, "category cannot be empty"),
        }
    }
}

impl std::error::Error for AddError {}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub habit: Habit,
    pub new_unlocked: Vec<String>,
}

/// Append a new habit. Rejects blank names and categories before any
/// mutation, so a failed add leaves the list untouched.
pub fn add_habit(
    data: &mut AppData,
    name: &str,
    category: &str,
    reminder_time: Option<String>,
) -> Result<Habit, AddError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AddError::EmptyName);
    }
    let category = category.trim();
    if category.is_empty() {
        return Err(AddError::EmptyCategory);
    }

    let habit = Habit {
        id: next_id(data),
        name: name.to_string(),
        category: category.to_string(),
        completions: Vec::new(),
        achievements: Vec::new(),
        reminder_time: reminder_time.filter(|time| !time.trim().is_empty()),
    };
    data.habits.push(habit.clone());
    Ok(habit)
}

/// Creation-timestamp surrogate key, bumped past any existing id so two
/// adds in the same millisecond still come out distinct.
fn next_id(data: &AppData) -> i64 {
    let stamp = Utc::now().timestamp_millis();
    let max_existing = data.habits.iter().map(|habit| habit.id).max().unwrap_or(0);
    stamp.max(max_existing + 1)
}

/// Remove the habit with the given id; absent ids are a no-op.
pub fn delete_habit(data: &mut AppData, id: i64) {
    data.habits.retain(|habit| habit.id != id);
}

/// Toggle a completion on one calendar day, then re-evaluate achievements
/// for the updated habit. Returns `None` when no habit has the given id.
pub fn toggle_completion(data: &mut AppData, habit_id: i64, day: NaiveDate) -> Option<ToggleOutcome> {
    let habit = data.habits.iter_mut().find(|habit| habit.id == habit_id)?;

    if habit.completions.contains(&day) {
        habit.completions.retain(|completed| *completed != day);
    } else {
        habit.completions.push(day);
    }

    let outcome = streaks::check_and_award(habit);
    habit.achievements = outcome.achievements;

    Some(ToggleOutcome {
        habit: habit.clone(),
        new_unlocked: outcome.new_unlocked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut data = AppData::default();
        let first = add_habit(&mut data, "Code daily", "Coding", None).unwrap();
        let second = add_habit(&mut data, "Read tech articles", "Learning", None).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(data.habits.len(), 2);
    }

    #[test]
    fn add_trims_name_and_category() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "  Code daily  ", " Coding ", None).unwrap();
        assert_eq!(habit.name, "Code daily");
        assert_eq!(habit.category, "Coding");
    }

    #[test]
    fn add_starts_with_empty_history() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "Code daily", "Coding", None).unwrap();
        assert!(habit.completions.is_empty());
        assert!(habit.achievements.is_empty());
    }

    #[test]
    fn add_rejects_whitespace_category_without_mutating() {
        let mut data = AppData::default();
        let result = add_habit(&mut data, "Code daily", "  ", None);
        assert_eq!(result.unwrap_err(), AddError::EmptyCategory);
        assert!(data.habits.is_empty());
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut data = AppData::default();
        let result = add_habit(&mut data, "", "Coding", None);
        assert_eq!(result.unwrap_err(), AddError::EmptyName);
        assert!(data.habits.is_empty());
    }

    #[test]
    fn add_drops_blank_reminder_time() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "Code daily", "Coding", Some("  ".to_string())).unwrap();
        assert_eq!(habit.reminder_time, None);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut data = AppData::default();
        let keep = add_habit(&mut data, "Code daily", "Coding", None).unwrap();
        let gone = add_habit(&mut data, "Read tech articles", "Learning", None).unwrap();
        delete_habit(&mut data, gone.id);
        assert_eq!(data.habits.len(), 1);
        assert_eq!(data.habits[0].id, keep.id);
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut data = AppData::default();
        add_habit(&mut data, "Code daily", "Coding", None).unwrap();
        delete_habit(&mut data, 404);
        assert_eq!(data.habits.len(), 1);
    }

    #[test]
    fn toggle_round_trip_restores_state() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "Code daily", "Coding", None).unwrap();

        let added = toggle_completion(&mut data, habit.id, today()).unwrap();
        assert_eq!(added.habit.completions, vec![today()]);

        let removed = toggle_completion(&mut data, habit.id, today()).unwrap();
        assert!(removed.habit.completions.is_empty());
    }

    #[test]
    fn toggle_unknown_habit_returns_none() {
        let mut data = AppData::default();
        assert!(toggle_completion(&mut data, 404, today()).is_none());
    }

    #[test]
    fn toggle_leaves_other_habits_untouched() {
        let mut data = AppData::default();
        let target = add_habit(&mut data, "Code daily", "Coding", None).unwrap();
        let other = add_habit(&mut data, "Read tech articles", "Learning", None).unwrap();

        toggle_completion(&mut data, target.id, today()).unwrap();

        let untouched = data.habits.iter().find(|h| h.id == other.id).unwrap();
        assert!(untouched.completions.is_empty());
    }

    #[test]
    fn toggle_awards_streak7_on_seventh_day() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "Code daily", "Coding", None).unwrap();

        for offset in (1..7).rev() {
            let outcome =
                toggle_completion(&mut data, habit.id, today() - Duration::days(offset)).unwrap();
            assert!(outcome.new_unlocked.is_empty());
        }
        let seventh = toggle_completion(&mut data, habit.id, today()).unwrap();
        assert_eq!(seventh.new_unlocked, vec!["streak7"]);
        assert_eq!(seventh.habit.achievements, vec!["streak7"]);
    }

    #[test]
    fn achievements_survive_streak_break() {
        let mut data = AppData::default();
        let habit = add_habit(&mut data, "Code daily", "Coding", None).unwrap();

        for offset in (0..7).rev() {
            toggle_completion(&mut data, habit.id, today() - Duration::days(offset)).unwrap();
        }
        // Un-complete the middle of the run; the badge stays unlocked.
        let broken = toggle_completion(&mut data, habit.id, today() - Duration::days(3)).unwrap();
        assert_eq!(broken.habit.achievements, vec!["streak7"]);
        assert!(broken.new_unlocked.is_empty());
    }
}
