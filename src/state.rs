use crate::models::TrackerData;
use chrono::NaiveDate;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub history_start: NaiveDate,
    pub data: Arc<Mutex<TrackerData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, history_start: NaiveDate, data: TrackerData) -> Self {
        Self {
            data_path,
            history_start,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
