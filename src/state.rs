use crate::geo::WalkSession;
use crate::models::AppData;
use crate::steps::{MotionTracker, StepDetectorConfig};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

// Lock order where both are needed: data first, then motion or walk.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub motion: Arc<Mutex<MotionTracker>>,
    pub walk: Arc<Mutex<WalkSession>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, config: StepDetectorConfig) -> Self {
        let mut tracker = MotionTracker::new(config);
        tracker.detector.seed(data.steps_today);
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            motion: Arc::new(Mutex::new(tracker)),
            walk: Arc::new(Mutex::new(WalkSession::default())),
        }
    }
}
