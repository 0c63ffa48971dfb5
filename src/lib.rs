pub mod app;
pub mod errors;
pub mod geo;
pub mod handlers;
pub mod models;
pub mod quotes;
pub mod state;
pub mod stats;
pub mod steps;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
