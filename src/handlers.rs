use crate::errors::AppError;
use crate::geo::{GeoFix, WalkSession};
use crate::models::{
    AppData, CapabilityRequest, DistanceResponse, MotionBatchRequest, MotionIngestResponse,
    ProfileResponse, QuoteResponse, SettingsResponse, StatsResponse, StepsResponse,
    UpdateProfileRequest, UpdateSettingsRequest, WaterResponse, MAX_USERNAME_CHARS,
    WATER_GOAL_GLASSES,
};
use crate::quotes;
use crate::state::AppState;
use crate::stats::build_stats;
use crate::steps::{calories_for, goal_percent, MotionTracker, DAILY_STEP_GOAL};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{Local, Utc};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;
    Ok(Html(render_index(&data)))
}

pub async fn get_steps(State(state): State<AppState>) -> Result<Json<StepsResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;

    Ok(Json(steps_response(&today, &data, &motion)))
}

pub async fn reset_steps(State(state): State<AppState>) -> Result<Json<StepsResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;

    data.steps_today = 0;
    motion.detector.reset();
    data.record_today();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(steps_response(&today, &data, &motion)))
}

pub async fn motion_samples(
    State(state): State<AppState>,
    Json(payload): Json<MotionBatchRequest>,
) -> Result<Json<MotionIngestResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;

    let detected = motion.ingest(&payload.samples);
    debug!("batch of {} samples, {detected} steps", payload.samples.len());
    if detected > 0 {
        data.steps_today = motion.detector.step_count();
        data.record_today();
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(MotionIngestResponse {
        detected,
        steps: steps_response(&today, &data, &motion),
    }))
}

pub async fn motion_capability(
    State(state): State<AppState>,
    Json(payload): Json<CapabilityRequest>,
) -> Result<Json<StepsResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;

    motion.gate = payload.state;
    Ok(Json(steps_response(&today, &data, &motion)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let mut motion = state.motion.lock().await;
    roll_day(&state, &mut data, &mut motion, &today).await?;

    Ok(Json(build_stats(&data)))
}

pub async fn get_water(State(state): State<AppState>) -> Result<Json<WaterResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    if data.water.date != today {
        data.water.roll_over(&today);
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Json(water_response(&data)))
}

pub async fn water_add(State(state): State<AppState>) -> Result<Json<WaterResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.water.add_glass(&today);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(water_response(&data)))
}

pub async fn water_reset(State(state): State<AppState>) -> Result<Json<WaterResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.water.reset(&today);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(water_response(&data)))
}

pub async fn get_distance(State(state): State<AppState>) -> Json<DistanceResponse> {
    let walk = state.walk.lock().await;
    Json(distance_response(&walk))
}

pub async fn distance_start(State(state): State<AppState>) -> Json<DistanceResponse> {
    let mut walk = state.walk.lock().await;
    walk.start(now_ms());
    Json(distance_response(&walk))
}

pub async fn distance_stop(State(state): State<AppState>) -> Json<DistanceResponse> {
    let mut walk = state.walk.lock().await;
    walk.stop(now_ms());
    Json(distance_response(&walk))
}

pub async fn distance_fix(
    State(state): State<AppState>,
    Json(fix): Json<GeoFix>,
) -> Json<DistanceResponse> {
    let mut walk = state.walk.lock().await;
    walk.on_fix(fix);
    Json(distance_response(&walk))
}

pub async fn get_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    if quotes::refresh_daily(&mut data.quote, &today) {
        persist_data(&state.data_path, &data).await?;
    }
    let quote = quotes::daily_quote(&data.quote);
    Ok(Json(QuoteResponse {
        text: quote.text.to_string(),
        author: quote.author.to_string(),
        daily: true,
    }))
}

// One-off refresh; the pinned quote of the day is untouched.
pub async fn next_quote() -> Json<QuoteResponse> {
    let quote = quotes::random_quote();
    Json(QuoteResponse {
        text: quote.text.to_string(),
        author: quote.author.to_string(),
        daily: false,
    })
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let data = state.data.lock().await;
    Json(ProfileResponse {
        username: data.profile.username.clone(),
        weight_kg: data.profile.weight_kg,
    })
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let username = match payload.username {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(AppError::bad_request("username must not be empty"));
            }
            if trimmed.chars().count() > MAX_USERNAME_CHARS {
                return Err(AppError::bad_request("username must be 30 characters or fewer"));
            }
            Some(trimmed.to_string())
        }
        None => None,
    };
    if let Some(weight) = payload.weight_kg {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::bad_request("weight must be a positive number"));
        }
    }

    let mut data = state.data.lock().await;
    if let Some(username) = username {
        data.profile.username = Some(username);
    }
    if let Some(weight) = payload.weight_kg {
        data.profile.weight_kg = Some(weight);
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ProfileResponse {
        username: data.profile.username.clone(),
        weight_kg: data.profile.weight_kg,
    }))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    let data = state.data.lock().await;
    Json(settings_response(&data))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    if let Some(theme) = payload.theme.as_deref() {
        if theme != "light" && theme != "dark" {
            return Err(AppError::bad_request("theme must be 'light' or 'dark'"));
        }
    }

    let mut data = state.data.lock().await;
    if let Some(theme) = payload.theme {
        data.settings.theme = theme;
    }
    if let Some(notifications) = payload.notifications {
        data.settings.notifications = notifications;
    }
    if let Some(sound) = payload.sound {
        data.settings.sound = sound;
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(settings_response(&data)))
}

// Commits the previous day once the calendar moves on. The detector resets
// with the live counter so a stale total cannot leak into the new day.
async fn roll_day(
    state: &AppState,
    data: &mut AppData,
    motion: &mut MotionTracker,
    today: &str,
) -> Result<(), AppError> {
    let mut changed = false;
    if data.roll_over(today) {
        motion.detector.reset();
        changed = true;
    }
    if data.water.date != today {
        data.water.roll_over(today);
        changed = true;
    }
    if changed {
        persist_data(&state.data_path, data).await?;
    }
    Ok(())
}

fn steps_response(date: &str, data: &AppData, motion: &MotionTracker) -> StepsResponse {
    StepsResponse {
        date: date.to_string(),
        steps: data.steps_today,
        goal: DAILY_STEP_GOAL,
        calories: calories_for(data.steps_today),
        distance_km: data.steps_today as f64 * motion.detector.config().step_length_km,
        goal_percent: goal_percent(data.steps_today),
        tracking_status: motion.gate.status_message().to_string(),
    }
}

fn water_response(data: &AppData) -> WaterResponse {
    WaterResponse {
        date: data.water.date.clone(),
        glasses: data.water.glasses,
        goal: WATER_GOAL_GLASSES,
        percent: data.water.percent(),
        goal_reached: data.water.goal_reached(),
    }
}

fn distance_response(walk: &WalkSession) -> DistanceResponse {
    let now = now_ms();
    DistanceResponse {
        active: walk.is_active(),
        distance_km: walk.total_km(),
        duration_secs: walk.duration_secs(now),
        avg_speed_kmh: walk.avg_speed_kmh(now),
    }
}

fn settings_response(data: &AppData) -> SettingsResponse {
    SettingsResponse {
        theme: data.settings.theme.clone(),
        notifications: data.settings.notifications,
        sound: data.settings.sound,
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
