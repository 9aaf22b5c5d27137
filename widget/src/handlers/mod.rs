//! HTTP handlers
//!
//! Axum request handlers for the widget.
//! Read endpoints negotiate content: Accept: application/json for JSON, otherwise HTML.

pub mod donations;
pub mod page;
pub mod progress;
pub mod supplies;
pub mod thoughts;

pub use donations::{get_feed, post_donation, post_donation_form};
pub use page::get_page;
pub use progress::get_progress;
pub use supplies::get_supplies;
pub use thoughts::{get_thoughts, post_thought, post_thought_form};

use axum::http::{header, HeaderMap};

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
