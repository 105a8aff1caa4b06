use crate::models::AppData;
use crate::reminders::SchedulerHandle;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<AppData>>,
    pub scheduler: SchedulerHandle,
}

impl AppState {
    pub fn new(data: AppData, scheduler: SchedulerHandle) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
            scheduler,
        }
    }
}
