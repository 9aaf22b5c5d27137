use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::app::widget_config::{
    COUNT_UP_STEPS, COUNT_UP_TICK_MS, DEFAULT_INITIAL_DONORS, DEFAULT_INITIAL_RAISED,
    DEFAULT_TARGET_AMOUNT, FEED_CAPACITY, GENERATOR_INTERVAL_MS, LABEL_REFRESH_INTERVAL_MS,
    THOUGHTS_CAPACITY,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Campaign goal in whole dollars
    pub target_amount: u64,
    /// Amount already raised at startup, in whole dollars
    pub initial_raised: u64,
    pub initial_donors: u64,
    pub feed_capacity: usize,
    pub thoughts_capacity: usize,
    pub generator_interval: Duration,
    pub label_refresh_interval: Duration,
    pub count_up_tick: Duration,
    pub count_up_steps: u64,
    /// Whether the background donation simulator runs
    pub simulate_donations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            target_amount: DEFAULT_TARGET_AMOUNT,
            initial_raised: DEFAULT_INITIAL_RAISED,
            initial_donors: DEFAULT_INITIAL_DONORS,
            feed_capacity: FEED_CAPACITY,
            thoughts_capacity: THOUGHTS_CAPACITY,
            generator_interval: Duration::from_millis(GENERATOR_INTERVAL_MS),
            label_refresh_interval: Duration::from_millis(LABEL_REFRESH_INTERVAL_MS),
            count_up_tick: Duration::from_millis(COUNT_UP_TICK_MS),
            count_up_steps: COUNT_UP_STEPS,
            simulate_donations: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            target_amount: env_or("TARGET_AMOUNT", defaults.target_amount),
            initial_raised: env_or("INITIAL_RAISED", defaults.initial_raised),
            initial_donors: env_or("INITIAL_DONORS", defaults.initial_donors),
            feed_capacity: env_or("FEED_CAPACITY", defaults.feed_capacity),
            thoughts_capacity: env_or("THOUGHTS_CAPACITY", defaults.thoughts_capacity),
            generator_interval: Duration::from_millis(env_or(
                "GENERATOR_INTERVAL_MS",
                GENERATOR_INTERVAL_MS,
            )),
            label_refresh_interval: Duration::from_millis(env_or(
                "LABEL_REFRESH_INTERVAL_MS",
                LABEL_REFRESH_INTERVAL_MS,
            )),
            count_up_tick: Duration::from_millis(env_or("COUNT_UP_TICK_MS", COUNT_UP_TICK_MS)),
            count_up_steps: env_or("COUNT_UP_STEPS", defaults.count_up_steps),
            simulate_donations: env_or("SIMULATE_DONATIONS", defaults.simulate_donations),
        }
    }
}

/// Read and parse an environment variable, falling back to `default`
/// when it is unset or unparseable.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, ?default, "Ignoring unparseable config value");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_constants() {
        let config = Config::default();

        assert_eq!(config.target_amount, 3_000_000);
        assert_eq!(config.initial_raised, 1_850_500);
        assert_eq!(config.initial_donors, 48_266);
        assert_eq!(config.feed_capacity, 120);
        assert_eq!(config.generator_interval, Duration::from_secs(7));
        assert_eq!(config.label_refresh_interval, Duration::from_secs(5));
        assert_eq!(config.count_up_tick, Duration::from_millis(50));
        assert_eq!(config.count_up_steps, 20);
        assert!(config.simulate_donations);
    }

    #[test]
    fn parse_or_accepts_valid_values() {
        assert_eq!(parse_or("PORT", "9090", 8080u16), 9090);
        assert_eq!(parse_or("FEED_CAPACITY", " 50 ", 120usize), 50);
        assert!(!parse_or("SIMULATE_DONATIONS", "false", true));
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("PORT", "not-a-port", 8080u16), 8080);
        assert_eq!(parse_or("TARGET_AMOUNT", "-5", 3_000_000u64), 3_000_000);
    }
}
