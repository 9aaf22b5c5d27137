//! Donation handlers
//!
//! The donor feed plus the two ways of submitting a donation: the page's
//! HTML form and a JSON endpoint. Invalid submissions are skipped without an
//! error, the same way the form behaves in the browser.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::wants_json;
use crate::domain::entities::{FeedEntry, ProgressSnapshot};
use crate::error::AppError;
use crate::feed::render_feed;
use crate::feed::renderer::{format_currency, initials};
use crate::AppState;

/// Donor card for JSON responses
#[derive(Debug, Serialize)]
pub struct FeedCard {
    pub id: String,
    pub donor_name: String,
    pub initials: String,
    pub amount_cents: u64,
    /// Display amount, e.g. "$100.00"
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub age_label: String,
    pub created_at: String,
}

impl From<FeedEntry> for FeedCard {
    fn from(entry: FeedEntry) -> Self {
        let donation = entry.donation;
        Self {
            id: donation.id.to_string(),
            initials: initials(&donation.donor_name),
            amount: format_currency(donation.amount_cents),
            donor_name: donation.donor_name,
            amount_cents: donation.amount_cents,
            message: donation.message,
            age_label: entry.age_label,
            created_at: donation.created_at.to_rfc3339(),
        }
    }
}

/// GET /feed
///
/// - Accept: application/json → donor cards, newest first
/// - Otherwise → feed fragment
pub async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let entries = state.donation_service.feed().await?;

    if wants_json(&headers) {
        let cards: Vec<FeedCard> = entries.into_iter().map(FeedCard::from).collect();
        Ok(Json(cards).into_response())
    } else {
        Ok(Html(render_feed(&entries)).into_response())
    }
}

/// Form body for POST /donate
#[derive(Debug, Deserialize)]
pub struct DonationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub message: String,
}

/// POST /donate
///
/// Handles the page's donation form, then sends the visitor back to the page.
pub async fn post_donation_form(
    State(state): State<AppState>,
    Form(form): Form<DonationForm>,
) -> Result<Redirect, AppError> {
    state
        .donation_service
        .submit(&form.name, &form.amount, &form.message)
        .await?;

    Ok(Redirect::to("/"))
}

/// Amount as a JSON number or string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    fn as_text(&self) -> String {
        match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.clone(),
        }
    }
}

/// Request body for POST /api/donations
#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    #[serde(default)]
    pub name: String,
    pub amount: AmountInput,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for POST /api/donations
#[derive(Debug, Serialize)]
pub struct DonationResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_id: Option<String>,
    pub progress: ProgressSnapshot,
}

/// POST /api/donations
///
/// JSON twin of the form. `accepted` is false when the submission was skipped.
pub async fn post_donation(
    State(state): State<AppState>,
    Json(request): Json<DonationRequest>,
) -> Result<Json<DonationResponse>, AppError> {
    let receipt = state
        .donation_service
        .submit(
            &request.name,
            &request.amount.as_text(),
            request.message.as_deref().unwrap_or_default(),
        )
        .await?;

    let response = match receipt {
        Some(receipt) => DonationResponse {
            accepted: true,
            donation_id: Some(receipt.donation.id.to_string()),
            progress: receipt.progress,
        },
        None => DonationResponse {
            accepted: false,
            donation_id: None,
            progress: state.donation_service.progress().await,
        },
    };

    Ok(Json(response))
}
