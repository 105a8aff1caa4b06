use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub completions: Vec<NaiveDate>,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    #[default]
    Default,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub notification_permission: NotificationPermission,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleRequest {
    /// Calendar day to toggle; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub completions: Vec<NaiveDate>,
    pub achievements: Vec<String>,
    pub reminder_time: Option<String>,
    pub streak: u32,
    pub average_per_week: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub habit: HabitView,
    pub new_unlocked: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PermissionBody {
    pub permission: NotificationPermission,
}

/// One entry in a replace-all post to the background reminder scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderEntry {
    pub id: i64,
    pub due_at_ms: i64,
    pub title: String,
    pub body: String,
}
