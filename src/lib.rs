pub mod app;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod reminders;
pub mod state;
pub mod store;
pub mod streaks;
pub mod ui;

pub use app::router;
pub use models::AppData;
pub use state::AppState;
