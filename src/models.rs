use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_HISTORY_DAYS: usize = 30;
pub const WATER_GOAL_GLASSES: u32 = 8;
pub const MAX_USERNAME_CHARS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub steps_today: u64,
    #[serde(default)]
    pub active_date: String,
    // ISO YYYY-MM-DD keys, so lexicographic order is chronological.
    #[serde(default)]
    pub history: BTreeMap<String, u64>,
    #[serde(default)]
    pub water: WaterLog,
    #[serde(default)]
    pub quote: QuoteOfDay,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub settings: Settings,
}

impl AppData {
    pub fn roll_over(&mut self, today: &str) -> bool {
        if self.active_date == today {
            return false;
        }
        if !self.active_date.is_empty() {
            let stale_date = std::mem::take(&mut self.active_date);
            self.history.insert(stale_date, self.steps_today);
        }
        self.steps_today = 0;
        self.active_date = today.to_string();
        // Today gets its own zero entry so the week view shows a zero
        // instead of a gap.
        self.history.insert(today.to_string(), 0);
        self.prune_history();
        true
    }

    pub fn record_today(&mut self) {
        if self.active_date.is_empty() {
            return;
        }
        self.history
            .insert(self.active_date.clone(), self.steps_today);
        self.prune_history();
    }

    fn prune_history(&mut self) {
        while self.history.len() > MAX_HISTORY_DAYS {
            let Some(oldest) = self.history.keys().next().cloned() else {
                break;
            };
            self.history.remove(&oldest);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaterLog {
    #[serde(default)]
    pub glasses: u32,
    #[serde(default)]
    pub date: String,
}

impl WaterLog {
    pub fn roll_over(&mut self, today: &str) {
        if self.date != today {
            self.glasses = 0;
            self.date = today.to_string();
        }
    }

    pub fn add_glass(&mut self, today: &str) -> bool {
        self.roll_over(today);
        if self.glasses < WATER_GOAL_GLASSES {
            self.glasses += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, today: &str) {
        self.glasses = 0;
        self.date = today.to_string();
    }

    pub fn goal_reached(&self) -> bool {
        self.glasses >= WATER_GOAL_GLASSES
    }

    pub fn percent(&self) -> f64 {
        (self.glasses as f64 / WATER_GOAL_GLASSES as f64).min(1.0) * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteOfDay {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_on")]
    pub notifications: bool,
    #[serde(default = "default_on")]
    pub sound: bool,
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            notifications: true,
            sound: true,
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_on() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct MotionBatchRequest {
    pub samples: Vec<crate::steps::MotionSample>,
}

#[derive(Debug, Deserialize)]
pub struct CapabilityRequest {
    pub state: crate::steps::SensorGate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StepsResponse {
    pub date: String,
    pub steps: u64,
    pub goal: u64,
    pub calories: u64,
    pub distance_km: f64,
    pub goal_percent: f64,
    pub tracking_status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MotionIngestResponse {
    pub detected: u64,
    pub steps: StepsResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    pub weekday: String,
    pub steps: u64,
    pub is_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub streak_days: u32,
    pub week: Vec<DaySummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WaterResponse {
    pub date: String,
    pub glasses: u32,
    pub goal: u32,
    pub percent: f64,
    pub goal_reached: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub active: bool,
    pub distance_km: f64,
    pub duration_secs: u64,
    pub avg_speed_kmh: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub text: String,
    pub author: String,
    pub daily: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileResponse {
    pub username: Option<String>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub theme: String,
    pub notifications: bool,
    pub sound: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub sound: Option<bool>,
}
