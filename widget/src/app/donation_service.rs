//! Donation service
//!
//! Owns the campaign totals and coordinates everything a donation touches:
//! - Totals (updated immediately)
//! - Donor feed (new card at the front, oldest evicted past capacity)
//! - Raised-amount count-up display
//!
//! Simulated and visitor-submitted donations go through the same
//! `record_donation` path.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::count_up::CountUpAnimator;
use crate::domain::entities::{Donation, FeedEntry, FundraisingState, NewDonation, ProgressSnapshot};
use crate::domain::ports::FeedRepository;
use crate::error::AppError;

/// Result of recording a donation
#[derive(Debug, Clone)]
pub struct DonationReceipt {
    pub donation: Donation,
    pub progress: ProgressSnapshot,
}

pub struct DonationService<FR>
where
    FR: FeedRepository,
{
    state: Mutex<FundraisingState>,
    feed: Arc<FR>,
    display: CountUpAnimator,
}

impl<FR> DonationService<FR>
where
    FR: FeedRepository,
{
    pub fn new(state: FundraisingState, feed: Arc<FR>, display: CountUpAnimator) -> Self {
        Self {
            state: Mutex::new(state),
            feed,
            display,
        }
    }

    /// Record a donation: bump totals, prepend its card, animate the display
    pub async fn record_donation(&self, donation: Donation) -> Result<DonationReceipt, AppError> {
        // Targets reach the animator in the order the totals change
        let totals = {
            let mut state = self.state.lock().await;
            state.record_donation(donation.amount_cents);
            self.display.animate_to(state.raised_dollars()).await;
            state.clone()
        };

        if let Some(evicted) = self.feed.push_front(donation.clone()).await? {
            tracing::debug!(donation_id = %evicted.id, "Evicted oldest feed entry");
        }

        tracing::info!(
            donation_id = %donation.id,
            donor = %donation.donor_name,
            amount_cents = donation.amount_cents,
            raised_cents = totals.raised_cents(),
            donors = totals.donor_count(),
            "Donation recorded"
        );

        Ok(DonationReceipt {
            donation,
            progress: totals.snapshot(self.display.displayed()),
        })
    }

    /// Record a visitor's form submission.
    ///
    /// Invalid submissions are skipped: `Ok(None)` and nothing changes.
    pub async fn submit(
        &self,
        name: &str,
        amount: &str,
        message: &str,
    ) -> Result<Option<DonationReceipt>, AppError> {
        let new_donation = match NewDonation::from_form(name, amount, message) {
            Ok(new_donation) => new_donation,
            Err(reason) => {
                tracing::debug!(%reason, "Skipping donation submission");
                return Ok(None);
            }
        };

        self.record_donation(Donation::new(new_donation))
            .await
            .map(Some)
    }

    /// Current totals as the progress display shows them
    pub async fn progress(&self) -> ProgressSnapshot {
        let state = self.state.lock().await;
        state.snapshot(self.display.displayed())
    }

    /// Feed entries, newest first
    pub async fn feed(&self) -> Result<Vec<FeedEntry>, AppError> {
        Ok(self.feed.list().await?)
    }

    /// Recompute every feed card's age label
    pub async fn refresh_labels(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let refreshed = self.feed.refresh_labels(now).await?;
        tracing::debug!(refreshed, "Refreshed feed age labels");
        Ok(refreshed)
    }

    /// Start the display counting toward the current total
    pub async fn sync_display(&self) {
        let state = self.state.lock().await;
        self.display.animate_to(state.raised_dollars()).await;
    }

    /// Entries held in the feed and its capacity
    pub async fn feed_usage(&self) -> Result<(usize, usize), AppError> {
        Ok((self.feed.len().await?, self.feed.capacity()))
    }
}
