//! Donation simulator
//!
//! An endless stream of made-up donations drawn uniformly from the fixed
//! pools in `widget_config`. Picks are independent, so names repeat.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::widget_config::{AMOUNTS, FIRST_NAMES, LAST_INITIALS, MESSAGES};
use crate::domain::entities::{dollars_to_cents, Donation, NewDonation};

pub struct DonationGenerator {
    rng: StdRng,
}

impl DonationGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// "First L." from the name pools
    pub fn random_name(&mut self) -> String {
        let first = pick(&mut self.rng, &FIRST_NAMES);
        let last = pick(&mut self.rng, &LAST_INITIALS);
        format!("{} {}", first, last)
    }

    pub fn next_donation(&mut self) -> NewDonation {
        let donor_name = self.random_name();
        let message = pick(&mut self.rng, &MESSAGES);
        let amount = *pick(&mut self.rng, &AMOUNTS);

        NewDonation::new(
            donor_name,
            dollars_to_cents(amount),
            Some(message.to_string()),
        )
    }
}

impl Default for DonationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DonationGenerator {
    type Item = Donation;

    fn next(&mut self) -> Option<Donation> {
        Some(Donation::new(self.next_donation()))
    }
}

fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}
