//! Page handler

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::feed::{render_page, Page};
use crate::AppState;

/// GET /
///
/// The whole widget: progress, donation form, feed, supplies, comment wall.
pub async fn get_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let progress = state.donation_service.progress().await;
    let feed = state.donation_service.feed().await?;
    let thoughts = state.thought_service.list().await?;

    Ok(Html(render_page(&Page {
        progress: &progress,
        feed: &feed,
        supplies: state.supplies.as_slice(),
        thoughts: &thoughts,
    })))
}
