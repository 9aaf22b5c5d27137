//! Domain entities
//!
//! Pure domain models for the fundraising widget.

pub mod donation;
pub mod fundraiser;
pub mod supply;
pub mod thought;

pub use donation::{Donation, FeedEntry, NewDonation};
pub use fundraiser::{dollars_to_cents, FundraisingState, ProgressSnapshot};
pub use supply::Supply;
pub use thought::Thought;
