use crate::models::{Habit, NotificationPermission, ReminderEntry};
use crate::state::AppState;
use crate::streaks;
use chrono::{DateTime, Local, NaiveTime, Timelike};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Per-entry delays are capped at 24 hours, matching the background
/// scheduler this mirrors; an entry further out fires early rather than
/// holding a huge timer.
pub const MAX_DELAY_MS: i64 = 24 * 60 * 60 * 1000;

const DEFAULT_BODY: &str = "Time to complete your habit!";

pub fn parse_reminder_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Habits whose reminder time matches the current minute and which have no
/// completion today. Malformed reminder times are skipped.
pub fn due_reminders_at(now: DateTime<Local>, habits: &[Habit]) -> Vec<ReminderEntry> {
    let today = now.date_naive();
    habits
        .iter()
        .filter_map(|habit| {
            let time = parse_reminder_time(habit.reminder_time.as_deref()?)?;
            if time.hour() != now.hour() || time.minute() != now.minute() {
                return None;
            }
            if streaks::is_completed_on(habit, today) {
                return None;
            }
            Some(ReminderEntry {
                id: habit.id,
                due_at_ms: now.timestamp_millis(),
                title: format!("Habit Reminder: {}", habit.name),
                body: DEFAULT_BODY.to_string(),
            })
        })
        .collect()
}

pub fn delay_ms(now_ms: i64, due_at_ms: i64) -> u64 {
    (due_at_ms - now_ms).clamp(0, MAX_DELAY_MS) as u64
}

/// Best-effort periodic scan: once a minute, while permission is granted,
/// fire a notification for every due reminder. Delivery is not guaranteed;
/// a suspended process simply misses the minute.
pub fn spawn_reminder_scan(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(60));
        loop {
            ticker.tick().await;
            let data = state.data.lock().await;
            if data.notification_permission != NotificationPermission::Granted {
                continue;
            }
            for entry in due_reminders_at(Local::now(), &data.habits) {
                show_notification(&entry);
            }
        }
    })
}

#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<Vec<ReminderEntry>>,
}

impl SchedulerHandle {
    /// Fire-and-forget: no acknowledgment, no retry. A post after the
    /// worker is gone only logs.
    pub fn post(&self, entries: Vec<ReminderEntry>) {
        if self.tx.send(entries).is_err() {
            warn!("reminder scheduler worker is gone; entries dropped");
        }
    }
}

/// Background scheduler worker. Every post wholly replaces the pending
/// entry list, cancelling anything previously scheduled. Entries fire in
/// due order and are dropped once shown.
pub fn spawn_scheduler() -> SchedulerHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<ReminderEntry>>();
    tokio::spawn(async move {
        let mut pending: Vec<ReminderEntry> = Vec::new();
        loop {
            let next = pending
                .iter()
                .enumerate()
                .min_by_key(|(_, entry)| entry.due_at_ms)
                .map(|(index, entry)| (index, entry.due_at_ms));

            match next {
                Some((index, due_at_ms)) => {
                    let delay = delay_ms(Local::now().timestamp_millis(), due_at_ms);
                    tokio::select! {
                        replacement = rx.recv() => match replacement {
                            Some(entries) => {
                                debug!(count = entries.len(), "replacing scheduled reminders");
                                pending = entries;
                            }
                            None => break,
                        },
                        () = tokio::time::sleep(Duration::from_millis(delay)) => {
                            let entry = pending.remove(index);
                            show_notification(&entry);
                        }
                    }
                }
                None => match rx.recv().await {
                    Some(entries) => {
                        debug!(count = entries.len(), "replacing scheduled reminders");
                        pending = entries;
                    }
                    None => break,
                },
            }
        }
    });
    SchedulerHandle { tx }
}

// Notification boundary. Failures here must never touch habit data, so the
// side effect is a structured log event and nothing else.
fn show_notification(entry: &ReminderEntry) {
    info!(
        habit_id = entry.id,
        title = %entry.title,
        body = %entry.body,
        "reminder notification"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;
    use chrono::TimeZone;

    fn habit(id: i64, reminder_time: Option<&str>, completions: Vec<chrono::NaiveDate>) -> Habit {
        Habit {
            id,
            name: format!("habit-{id}"),
            category: "General".to_string(),
            completions,
            achievements: Vec::new(),
            reminder_time: reminder_time.map(str::to_string),
        }
    }

    fn at_nine() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 9, 30, 15).unwrap()
    }

    #[test]
    fn parses_valid_reminder_time() {
        assert_eq!(
            parse_reminder_time("09:30"),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
    }

    #[test]
    fn rejects_malformed_reminder_time() {
        assert_eq!(parse_reminder_time("half past nine"), None);
        assert_eq!(parse_reminder_time(""), None);
    }

    #[test]
    fn due_when_minute_matches_and_not_completed() {
        let habits = vec![habit(1, Some("09:30"), vec![])];
        let due = due_reminders_at(at_nine(), &habits);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);
        assert_eq!(due[0].title, "Habit Reminder: habit-1");
    }

    #[test]
    fn not_due_when_completed_today() {
        let habits = vec![habit(1, Some("09:30"), vec![at_nine().date_naive()])];
        assert!(due_reminders_at(at_nine(), &habits).is_empty());
    }

    #[test]
    fn not_due_at_a_different_minute() {
        let habits = vec![habit(1, Some("09:31"), vec![])];
        assert!(due_reminders_at(at_nine(), &habits).is_empty());
    }

    #[test]
    fn skips_habits_without_or_with_malformed_reminder() {
        let habits = vec![habit(1, None, vec![]), habit(2, Some("soon"), vec![])];
        assert!(due_reminders_at(at_nine(), &habits).is_empty());
    }

    #[test]
    fn delay_is_zero_for_past_due_entries() {
        assert_eq!(delay_ms(1_000, 500), 0);
    }

    #[test]
    fn delay_caps_at_twenty_four_hours() {
        let thirty_hours = 30 * 60 * 60 * 1000;
        assert_eq!(delay_ms(0, thirty_hours), MAX_DELAY_MS as u64);
    }
}
