use crate::errors::TrackerError;
use crate::models::{AppData, current_month};
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Reads the persisted dataset, falling back to the seed when the file is
/// missing, unreadable or corrupt. Loaded matrices are reshaped to the
/// selected month's grid.
pub async fn load_data(path: &Path) -> AppData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                return AppData::default();
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            return AppData::default();
        }
    };

    if data.selected_month > 11 {
        warn!("persisted month {} out of range, using current month", data.selected_month);
        data.selected_month = current_month();
    }
    data.normalize_completions();
    data
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), TrackerError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Saves without failing the caller; errors are only logged.
pub async fn persist_best_effort(path: &Path, data: &AppData) {
    if let Err(err) = persist_data(path, data).await {
        error!("failed to persist data: {err}");
    }
}
