//! Comment wall handlers

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::wants_json;
use crate::domain::entities::Thought;
use crate::error::AppError;
use crate::feed::render_thoughts;
use crate::AppState;

/// Thought for JSON responses
#[derive(Debug, Serialize)]
pub struct ThoughtCard {
    pub message: String,
    pub created_at: String,
}

impl From<Thought> for ThoughtCard {
    fn from(thought: Thought) -> Self {
        Self {
            message: thought.message,
            created_at: thought.created_at.to_rfc3339(),
        }
    }
}

/// GET /thoughts
pub async fn get_thoughts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let thoughts = state.thought_service.list().await?;

    if wants_json(&headers) {
        let cards: Vec<ThoughtCard> = thoughts.into_iter().map(ThoughtCard::from).collect();
        Ok(Json(cards).into_response())
    } else {
        Ok(Html(render_thoughts(&thoughts)).into_response())
    }
}

/// Body for POST /comment and POST /api/thoughts
#[derive(Debug, Deserialize)]
pub struct ThoughtRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /comment
pub async fn post_thought_form(
    State(state): State<AppState>,
    Form(form): Form<ThoughtRequest>,
) -> Result<Redirect, AppError> {
    state.thought_service.post(&form.message).await?;
    Ok(Redirect::to("/"))
}

#[derive(Debug, Serialize)]
pub struct ThoughtResponse {
    pub accepted: bool,
}

/// POST /api/thoughts
pub async fn post_thought(
    State(state): State<AppState>,
    Json(request): Json<ThoughtRequest>,
) -> Result<Json<ThoughtResponse>, AppError> {
    let posted = state.thought_service.post(&request.message).await?;
    Ok(Json(ThoughtResponse {
        accepted: posted.is_some(),
    }))
}
