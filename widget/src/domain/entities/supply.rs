//! Supply gallery item

use serde::Serialize;

use crate::app::widget_config::SUPPLIES;

/// One distributed-supplies card: a photo and its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supply {
    pub image: String,
    pub description: String,
}

impl Supply {
    pub fn new(image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            description: description.into(),
        }
    }

    /// The fixed gallery shown on the page
    pub fn gallery() -> Vec<Supply> {
        SUPPLIES
            .iter()
            .map(|(image, description)| Supply::new(*image, *description))
            .collect()
    }
}
