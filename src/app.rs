use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day/:date", get(handlers::get_day).post(handlers::set_day))
        .route("/api/month/:month", get(handlers::get_month))
        .route("/api/averages", get(handlers::get_averages))
        .with_state(state)
}
