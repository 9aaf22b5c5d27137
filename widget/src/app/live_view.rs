//! Live view
//!
//! Background tasks that keep the widget moving while it is mounted:
//! - Donation simulator (one donation per generator interval)
//! - Age-label refresher (every label refresh interval)
//!
//! The tasks live exactly as long as the `LiveView` handle. Dropping the
//! handle or calling `shutdown` stops them.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::donation_generator::DonationGenerator;
use super::donation_service::DonationService;
use crate::config::Config;
use crate::domain::ports::FeedRepository;

/// Timer settings for the background tasks
#[derive(Debug, Clone)]
pub struct LiveSettings {
    pub generator_interval: Duration,
    pub label_refresh_interval: Duration,
    pub simulate_donations: bool,
}

impl From<&Config> for LiveSettings {
    fn from(config: &Config) -> Self {
        Self {
            generator_interval: config.generator_interval,
            label_refresh_interval: config.label_refresh_interval,
            simulate_donations: config.simulate_donations,
        }
    }
}

/// Handle owning the widget's background tasks
pub struct LiveView {
    tasks: Vec<JoinHandle<()>>,
}

impl LiveView {
    /// Start the background tasks and the initial count-up of the display
    pub async fn mount<FR>(
        service: Arc<DonationService<FR>>,
        generator: DonationGenerator,
        settings: &LiveSettings,
    ) -> Self
    where
        FR: FeedRepository + 'static,
    {
        service.sync_display().await;

        let mut tasks = vec![tokio::spawn(refresh_labels(
            service.clone(),
            settings.label_refresh_interval,
        ))];

        if settings.simulate_donations {
            tasks.push(tokio::spawn(simulate_donations(
                service,
                generator,
                settings.generator_interval,
            )));
        }

        tracing::info!(
            tasks = tasks.len(),
            simulate = settings.simulate_donations,
            "Live view mounted"
        );

        Self { tasks }
    }

    /// Number of background tasks still running
    #[cfg(test)]
    pub fn running(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Stop the background tasks and wait for them to exit
    pub async fn shutdown(mut self) {
        let tasks = std::mem::take(&mut self.tasks);
        for task in &tasks {
            task.abort();
        }
        for task in tasks {
            let _ = task.await;
        }
        tracing::info!("Live view unmounted");
    }
}

impl Drop for LiveView {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn ticker(every: Duration) -> tokio::time::Interval {
    let mut ticker = interval_at(Instant::now() + every, every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn simulate_donations<FR>(
    service: Arc<DonationService<FR>>,
    mut generator: DonationGenerator,
    every: Duration,
) where
    FR: FeedRepository,
{
    let mut ticker = ticker(every);
    loop {
        ticker.tick().await;
        let Some(donation) = generator.next() else {
            break;
        };
        if let Err(e) = service.record_donation(donation).await {
            tracing::warn!(error = %e, "Failed to record simulated donation");
        }
    }
}

async fn refresh_labels<FR>(service: Arc<DonationService<FR>>, every: Duration)
where
    FR: FeedRepository,
{
    let mut ticker = ticker(every);
    loop {
        ticker.tick().await;
        if let Err(e) = service.refresh_labels(Utc::now()).await {
            tracing::warn!(error = %e, "Failed to refresh feed labels");
        }
    }
}
