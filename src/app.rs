use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/click/user1", post(handlers::click_user1))
        .route("/click/user2", post(handlers::click_user2))
        .route("/reset", post(handlers::reset_form))
        .route("/api/spark", get(handlers::get_spark))
        .route("/api/click", post(handlers::click))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
