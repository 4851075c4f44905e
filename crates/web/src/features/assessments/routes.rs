use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use vision::image::MAX_IMAGE_BYTES;

use super::handlers::{
    create_assessment, get_assessment, list_assessments, list_by_status, list_flagged,
    update_assessment,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assessments))
        .route("/", post(create_assessment))
        .route("/:id", get(get_assessment))
        .route("/:id", patch(update_assessment))
        .route("/status/flagged", get(list_flagged))
        .route("/status/:status", get(list_by_status))
        // Image cap plus headroom for the multipart framing.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 64 * 1024))
}
