//! Progress handler

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::wants_json;
use crate::feed::render_progress;
use crate::AppState;

/// GET /progress
///
/// - Accept: application/json → progress snapshot
/// - Otherwise → progress bar fragment
pub async fn get_progress(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let progress = state.donation_service.progress().await;

    if wants_json(&headers) {
        Json(progress).into_response()
    } else {
        Html(render_progress(&progress)).into_response()
    }
}
