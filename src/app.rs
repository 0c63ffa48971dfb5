use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/steps", get(handlers::get_steps))
        .route("/api/steps/reset", post(handlers::reset_steps))
        .route("/api/motion/samples", post(handlers::motion_samples))
        .route("/api/motion/capability", post(handlers::motion_capability))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/water", get(handlers::get_water))
        .route("/api/water/add", post(handlers::water_add))
        .route("/api/water/reset", post(handlers::water_reset))
        .route("/api/distance", get(handlers::get_distance))
        .route("/api/distance/start", post(handlers::distance_start))
        .route("/api/distance/stop", post(handlers::distance_stop))
        .route("/api/distance/fix", post(handlers::distance_fix))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/quote/next", post(handlers::next_quote))
        .route("/api/profile", get(handlers::get_profile).post(handlers::update_profile))
        .route("/api/settings", get(handlers::get_settings).post(handlers::update_settings))
        .with_state(state)
}
