//! Fundraising totals
//!
//! The campaign goal plus the running raised amount and donor count.
//! Totals only ever grow: each recorded donation adds its amount and one donor.

use serde::Serialize;

use crate::error::DomainError;

/// Running totals for a campaign. Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundraisingState {
    target_cents: u64,
    raised_cents: u64,
    donor_count: u64,
}

impl FundraisingState {
    /// Create campaign totals. The target must be positive.
    pub fn new(target_cents: u64, raised_cents: u64, donor_count: u64) -> Result<Self, DomainError> {
        if target_cents == 0 {
            return Err(DomainError::Validation(
                "Target amount must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            target_cents,
            raised_cents,
            donor_count,
        })
    }

    /// Create campaign totals from whole-dollar amounts
    pub fn from_dollars(target: u64, raised: u64, donor_count: u64) -> Result<Self, DomainError> {
        Self::new(
            dollars_to_cents(target),
            dollars_to_cents(raised),
            donor_count,
        )
    }

    /// Add one donation to the totals.
    ///
    /// Callers validate that `amount_cents` is positive.
    pub fn record_donation(&mut self, amount_cents: u64) {
        self.donor_count = self.donor_count.saturating_add(1);
        self.raised_cents = self.raised_cents.saturating_add(amount_cents);
    }

    /// Progress toward the target, clamped to `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        let percent = self.raised_cents as f64 / self.target_cents as f64 * 100.0;
        percent.min(100.0)
    }

    pub fn target_cents(&self) -> u64 {
        self.target_cents
    }

    pub fn raised_cents(&self) -> u64 {
        self.raised_cents
    }

    pub fn donor_count(&self) -> u64 {
        self.donor_count
    }

    /// Whole dollars raised, the unit the progress display counts in
    pub fn raised_dollars(&self) -> u64 {
        self.raised_cents / 100
    }

    /// Point-in-time view for rendering; `displayed_raised` is the animated value
    pub fn snapshot(&self, displayed_raised: u64) -> ProgressSnapshot {
        ProgressSnapshot {
            target_cents: self.target_cents,
            raised_cents: self.raised_cents,
            donor_count: self.donor_count,
            percent: self.progress_percent(),
            displayed_raised,
        }
    }
}

/// What the progress display shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub target_cents: u64,
    pub raised_cents: u64,
    pub donor_count: u64,
    /// Clamped percentage of the target reached
    pub percent: f64,
    /// Raised amount (whole dollars) as currently shown by the count-up animation
    pub displayed_raised: u64,
}

pub fn dollars_to_cents(dollars: u64) -> u64 {
    dollars.saturating_mul(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> FundraisingState {
        FundraisingState::from_dollars(3_000_000, 1_850_500, 48_266).unwrap()
    }

    #[test]
    fn zero_target_rejected() {
        let result = FundraisingState::new(0, 0, 0);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn record_donation_adds_amount_and_one_donor() {
        let mut state = campaign();

        state.record_donation(10_000);

        assert_eq!(state.raised_cents(), 185_060_000);
        assert_eq!(state.donor_count(), 48_267);
        assert_eq!(state.target_cents(), 300_000_000);
    }

    #[test]
    fn record_donation_is_additive_over_sequences() {
        let mut state = FundraisingState::new(100_000, 0, 0).unwrap();
        let amounts = [1, 250, 10_000, 99, 5_000_000, 42];

        for (i, amount) in amounts.iter().enumerate() {
            let before = state.clone();
            state.record_donation(*amount);
            assert_eq!(state.raised_cents(), before.raised_cents() + amount);
            assert_eq!(state.donor_count(), before.donor_count() + 1);
            assert_eq!(state.donor_count(), i as u64 + 1);
        }
    }

    #[test]
    fn progress_percent_end_to_end_value() {
        let mut state = campaign();
        state.record_donation(dollars_to_cents(100));

        let percent = state.progress_percent();
        assert!((percent - 61.686_666).abs() < 1e-4, "got {percent}");
    }

    #[test]
    fn progress_percent_clamped_at_hundred() {
        let mut state = FundraisingState::from_dollars(1_000, 900, 3).unwrap();
        assert!((state.progress_percent() - 90.0).abs() < f64::EPSILON);

        state.record_donation(dollars_to_cents(100));
        assert_eq!(state.progress_percent(), 100.0);

        state.record_donation(dollars_to_cents(1_000_000));
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn progress_percent_zero_when_nothing_raised() {
        let state = FundraisingState::new(500, 0, 0).unwrap();
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn record_donation_saturates() {
        let mut state = FundraisingState::new(1, u64::MAX - 5, u64::MAX).unwrap();
        state.record_donation(100);

        assert_eq!(state.raised_cents(), u64::MAX);
        assert_eq!(state.donor_count(), u64::MAX);
    }

    #[test]
    fn snapshot_carries_totals() {
        let state = campaign();
        let snapshot = state.snapshot(1_000);

        assert_eq!(snapshot.raised_cents, 185_050_000);
        assert_eq!(snapshot.donor_count, 48_266);
        assert_eq!(snapshot.displayed_raised, 1_000);
        assert_eq!(state.raised_dollars(), 1_850_500);
    }
}
