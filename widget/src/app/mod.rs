//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the background timers.

pub mod count_up;
pub mod donation_generator;
pub mod donation_service;
pub mod live_view;
pub mod thought_service;
pub mod widget_config;

pub use count_up::CountUpAnimator;
pub use donation_generator::DonationGenerator;
pub use donation_service::DonationService;
pub use live_view::{LiveSettings, LiveView};
pub use thought_service::ThoughtService;
