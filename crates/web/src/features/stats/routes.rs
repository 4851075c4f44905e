use axum::{Router, routing::get};

use super::handlers::today_stats;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/today", get(today_stats))
}
