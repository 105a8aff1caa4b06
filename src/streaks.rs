use crate::models::Habit;
use chrono::{Duration, Local, NaiveDate};

pub const AVERAGE_WINDOW_DAYS: u32 = 30;

const STREAK_THRESHOLDS: &[(u32, &str)] = &[(7, "streak7"), (30, "streak30"), (100, "streak100")];

/// Length of the most recent unbroken run of daily completions.
///
/// The run is not required to reach today; a streak that ended last week
/// still counts at its full length.
pub fn calculate_streak(completions: &[NaiveDate]) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut days = completions.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));
    // Same-day duplicates must neither inflate nor break the run.
    days.dedup();

    let mut streak = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementOutcome {
    pub achievements: Vec<String>,
    pub new_unlocked: Vec<String>,
}

/// Evaluate streak milestones for a habit.
///
/// Already-unlocked ids are left untouched and excluded from `new_unlocked`;
/// re-running on an unchanged habit yields the same set and nothing new.
pub fn check_and_award(habit: &Habit) -> AchievementOutcome {
    let streak = calculate_streak(&habit.completions);
    let mut achievements = habit.achievements.clone();
    let mut new_unlocked = Vec::new();

    for &(threshold, id) in STREAK_THRESHOLDS {
        if streak >= threshold && !achievements.iter().any(|have| have == id) {
            achievements.push(id.to_string());
            new_unlocked.push(id.to_string());
        }
    }

    AchievementOutcome {
        achievements,
        new_unlocked,
    }
}

pub fn is_completed_on(habit: &Habit, day: NaiveDate) -> bool {
    habit.completions.contains(&day)
}

/// Completions per week over the trailing window ending today.
pub fn average_completion(habit: &Habit, window_days: u32) -> f64 {
    average_completion_at(Local::now().date_naive(), habit, window_days)
}

pub fn average_completion_at(today: NaiveDate, habit: &Habit, window_days: u32) -> f64 {
    if window_days == 0 {
        return 0.0;
    }

    // Both window endpoints are inclusive at calendar-day granularity.
    let mut completed = 0u32;
    for offset in 0..=window_days {
        let day = today - Duration::days(i64::from(offset));
        if is_completed_on(habit, day) {
            completed += 1;
        }
    }
    f64::from(completed) / f64::from(window_days) * 7.0
}
