use crate::catalog::{AchievementDef, ACHIEVEMENTS};
use crate::errors::AppError;
use crate::export;
use crate::models::{
    Habit, HabitView, NewHabitRequest, PermissionBody, ReminderEntry, ToggleRequest,
    ToggleResponse,
};
use crate::state::AppState;
use crate::store;
use crate::streaks;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let data = state.data.lock().await;
    Html(render_index(&date, data.habits.len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitView>> {
    let data = state.data.lock().await;
    Json(data.habits.iter().map(to_view).collect())
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let mut data = state.data.lock().await;
    let habit = store::add_habit(
        &mut data,
        &payload.name,
        &payload.category,
        payload.reminder_time,
    )
    .map_err(|err| AppError::bad_request(err.to_string()))?;

    info!(id = habit.id, name = %habit.name, "habit added");
    Ok((StatusCode::CREATED, Json(to_view(&habit))))
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    let mut data = state.data.lock().await;
    store::delete_habit(&mut data, id);
    StatusCode::NO_CONTENT
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let day = payload.date.unwrap_or_else(|| Local::now().date_naive());
    let mut data = state.data.lock().await;
    let outcome = store::toggle_completion(&mut data, id, day)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;

    if !outcome.new_unlocked.is_empty() {
        info!(id, unlocked = ?outcome.new_unlocked, "achievements unlocked");
    }

    Ok(Json(ToggleResponse {
        habit: to_view(&outcome.habit),
        new_unlocked: outcome.new_unlocked,
    }))
}

pub async fn list_achievements() -> Json<&'static [AchievementDef]> {
    Json(ACHIEVEMENTS)
}

pub async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.data.lock().await;
    let body = export::habits_to_csv(&data.habits);
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"habits.csv\"",
            ),
        ],
        body,
    )
}

pub async fn export_json(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let body = export::habits_to_json(&data.habits).map_err(AppError::internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"habits.json\"",
            ),
        ],
        body,
    ))
}

pub async fn get_permission(State(state): State<AppState>) -> Json<PermissionBody> {
    let data = state.data.lock().await;
    Json(PermissionBody {
        permission: data.notification_permission,
    })
}

pub async fn set_permission(
    State(state): State<AppState>,
    Json(payload): Json<PermissionBody>,
) -> Json<PermissionBody> {
    let mut data = state.data.lock().await;
    data.notification_permission = payload.permission;
    info!(permission = ?payload.permission, "notification permission updated");
    Json(PermissionBody {
        permission: data.notification_permission,
    })
}

pub async fn schedule_reminders(
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReminderEntry>>,
) -> StatusCode {
    state.scheduler.post(entries);
    StatusCode::ACCEPTED
}

fn to_view(habit: &Habit) -> HabitView {
    HabitView {
        id: habit.id,
        name: habit.name.clone(),
        category: habit.category.clone(),
        completions: habit.completions.clone(),
        achievements: habit.achievements.clone(),
        reminder_time: habit.reminder_time.clone(),
        streak: streaks::calculate_streak(&habit.completions),
        average_per_week: streaks::average_completion(habit, streaks::AVERAGE_WINDOW_DAYS),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
