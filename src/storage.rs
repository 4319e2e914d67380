use crate::errors::AppError;
use crate::models::TrackerData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/weights.json"))
}

pub async fn load_data(path: &Path) -> TrackerData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file, starting empty: {err}");
                TrackerData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TrackerData::default(),
        Err(err) => {
            error!("failed to read data file, starting empty: {err}");
            TrackerData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &TrackerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightField;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("weight_tracker_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_store() {
        let path = scratch_path("missing");
        assert_eq!(load_data(&path).await, TrackerData::default());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty_store() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert_eq!(load_data(&path).await, TrackerData::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_store_loads_back_unchanged() {
        let path = scratch_path("roundtrip");
        let mut data = TrackerData::default();
        data.set_field("2025-06-01", WeightField::Morning, "180.5");
        data.set_field("2025-06-02", WeightField::Evening, "not numeric");

        persist_data(&path, &data).await.unwrap();
        assert_eq!(load_data(&path).await, data);
        let _ = fs::remove_file(&path).await;
    }
}
