use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::add_habit),
        )
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_completion))
        .route("/api/achievements", get(handlers::list_achievements))
        .route("/api/export/csv", get(handlers::export_csv))
        .route("/api/export/json", get(handlers::export_json))
        .route(
            "/api/notifications/permission",
            get(handlers::get_permission).post(handlers::set_permission),
        )
        .route("/api/reminders", post(handlers::schedule_reminders))
        .with_state(state)
}
