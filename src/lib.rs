pub mod app;
pub mod calendar;
pub mod config;
pub mod daily;
pub mod errors;
pub mod handlers;
pub mod matrix;
pub mod models;
pub mod mood;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tracker;

pub use app::router;
pub use calendar::CalendarGrid;
pub use config::ServerConfig;
pub use models::AppData;
pub use state::AppState;
pub use storage::load_data;
