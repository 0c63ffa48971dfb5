use crate::errors::AppError;
use crate::models::AppData;
use std::{env, io::ErrorKind, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("FITTRACK_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/fittrack.json"))
}

// A missing file is a fresh install; an unreadable or corrupt one degrades
// to defaults rather than refusing to start.
pub async fn load_data(path: &Path) -> AppData {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return AppData::default(),
        Err(err) => {
            error!("could not read {}: {err}", path.display());
            return AppData::default();
        }
    };
    match serde_json::from_slice::<AppData>(&bytes) {
        Ok(mut data) => {
            // A partial or hand-edited file can hold a live count with no
            // matching history entry; re-sync so streaks and the week view
            // see today.
            data.record_today();
            data
        }
        Err(err) => {
            error!("could not parse {}: {err}", path.display());
            AppData::default()
        }
    }
}

// Write-then-rename keeps the live file intact if the process dies mid-write.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let staged = path.with_extension("json.tmp");
    fs::write(&staged, payload).await?;
    fs::rename(&staged, path).await?;
    Ok(())
}
