pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod spark;
pub mod ui;
pub mod state;

pub use app::router;
pub use models::{SparkState, UserKey};
pub use state::AppState;
