//! Donation domain entity
//!
//! A single contribution event, either typed into the form by a visitor or
//! produced by the donation simulator. Donations only live as long as their
//! card stays in the feed.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::feed::relative_time::age_label;

/// Unique identifier for a donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DonationId(pub Uuid);

impl DonationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DonationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DonationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded donation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donation {
    pub id: DonationId,
    pub donor_name: String,
    pub amount_cents: u64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Stamp a new donation with an id and the current time
    pub fn new(new_donation: NewDonation) -> Self {
        Self::at(new_donation, Utc::now())
    }

    pub fn at(new_donation: NewDonation, created_at: DateTime<Utc>) -> Self {
        Self {
            id: DonationId::new(),
            donor_name: new_donation.donor_name,
            amount_cents: new_donation.amount_cents,
            message: new_donation.message,
            created_at,
        }
    }
}

/// Data needed to record a donation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonation {
    pub donor_name: String,
    pub amount_cents: u64,
    pub message: Option<String>,
}

impl NewDonation {
    /// Build a donation; an empty message is treated as no message
    pub fn new(donor_name: impl Into<String>, amount_cents: u64, message: Option<String>) -> Self {
        Self {
            donor_name: donor_name.into(),
            amount_cents,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// Validate a raw form submission.
    ///
    /// The name and message are trimmed. The name must be non-empty and the
    /// amount must parse as a positive number of at least one cent.
    pub fn from_form(name: &str, amount: &str, message: &str) -> Result<Self, SubmissionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubmissionError::EmptyName);
        }

        let amount_cents = parse_amount_cents(amount)?;
        let message = message.trim();

        Ok(Self::new(
            name,
            amount_cents,
            Some(message.to_string()),
        ))
    }
}

/// Leading decimal number of an amount field, e.g. "12" in "12abc"
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("amount pattern is valid")
});

/// Parse a dollar amount into cents, rounding to the nearest cent.
///
/// Only the leading number counts, so "12abc" is 12 dollars and "100,000"
/// is 100. Input with no leading number is rejected.
pub fn parse_amount_cents(raw: &str) -> Result<u64, SubmissionError> {
    let invalid = || SubmissionError::InvalidAmount(raw.to_string());

    let number = LEADING_NUMBER
        .find(raw.trim_start())
        .ok_or_else(invalid)?;
    let dollars: f64 = number.as_str().parse().map_err(|_| invalid())?;
    if !dollars.is_finite() || dollars <= 0.0 {
        return Err(invalid());
    }

    let cents = (dollars * 100.0).round();
    if cents < 1.0 {
        return Err(invalid());
    }

    // Float-to-int casts saturate at u64::MAX
    Ok(cents as u64)
}

/// A donation as it sits in the feed, with its current age label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub donation: Donation,
    pub age_label: String,
}

impl FeedEntry {
    pub fn new(donation: Donation) -> Self {
        Self {
            donation,
            age_label: "just now".to_string(),
        }
    }

    /// Recompute the age label as seen at `now`
    pub fn refresh_label(&mut self, now: DateTime<Utc>) {
        self.age_label = age_label(self.donation.created_at, now);
    }
}
