//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::adapters::{InMemoryFeedRepository, InMemoryThoughtRepository};
use crate::app::{CountUpAnimator, DonationService, ThoughtService};
use crate::domain::entities::{Donation, FundraisingState, NewDonation, Supply};
use crate::AppState;

/// Campaign totals the widget starts with
pub fn test_campaign() -> FundraisingState {
    FundraisingState::from_dollars(3_000_000, 1_850_500, 48_266).unwrap()
}

/// Create a donation created now
pub fn test_donation(name: &str, amount_cents: u64) -> Donation {
    Donation::new(NewDonation::new(name, amount_cents, None))
}

/// Create a donation with a specific creation time
pub fn test_donation_at(name: &str, amount_cents: u64, created_at: DateTime<Utc>) -> Donation {
    Donation::at(NewDonation::new(name, amount_cents, None), created_at)
}

/// Donation service over a 120-entry feed with the standard count-up timing
pub fn test_service(state: FundraisingState) -> DonationService<InMemoryFeedRepository> {
    DonationService::new(
        state,
        Arc::new(InMemoryFeedRepository::new(120)),
        CountUpAnimator::new(0, Duration::from_millis(50), 20),
    )
}

/// App state wired to fresh in-memory stores
pub fn test_app_state() -> AppState {
    AppState {
        donation_service: Arc::new(test_service(test_campaign())),
        thought_service: Arc::new(ThoughtService::new(Arc::new(
            InMemoryThoughtRepository::new(200),
        ))),
        supplies: Arc::new(Supply::gallery()),
    }
}
