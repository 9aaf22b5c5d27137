//! Supplies gallery handler

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::wants_json;
use crate::feed::render_supplies;
use crate::AppState;

/// GET /supplies
pub async fn get_supplies(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if wants_json(&headers) {
        Json(state.supplies.as_ref().clone()).into_response()
    } else {
        Html(render_supplies(state.supplies.as_slice())).into_response()
    }
}
