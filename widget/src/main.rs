//! Fundraiser Widget Server
//!
//! Serves a single-page fundraising widget: a progress bar, a live donor feed
//! fed by a donation simulator and a donation form, a supplies gallery, and a
//! comment wall. Everything is held in memory for the life of the process.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryFeedRepository, InMemoryThoughtRepository};
use app::{
    CountUpAnimator, DonationGenerator, DonationService, LiveSettings, LiveView, ThoughtService,
};
use config::Config;
use domain::entities::{FundraisingState, Supply};
use error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub donation_service: Arc<DonationService<InMemoryFeedRepository>>,
    pub thought_service: Arc<ThoughtService<InMemoryThoughtRepository>>,
    pub supplies: Arc<Vec<Supply>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    feed_entries: usize,
    feed_capacity: usize,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let (feed_entries, feed_capacity) = state.donation_service.feed_usage().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        feed_entries,
        feed_capacity,
    }))
}

/// Routes that accept visitor submissions
fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/donate", post(handlers::post_donation_form))
        .route("/api/donations", post(handlers::post_donation))
        .route("/comment", post(handlers::post_thought_form))
        .route("/api/thoughts", post(handlers::post_thought))
}

/// Assemble the full router around the given submission routes
fn build_router(state: AppState, submissions: Router<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Page and fragments
        .route("/", get(handlers::get_page))
        .route("/progress", get(handlers::get_progress))
        .route("/feed", get(handlers::get_feed))
        .route("/supplies", get(handlers::get_supplies))
        .route("/thoughts", get(handlers::get_thoughts))
        .merge(submissions)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fundraiser_widget=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fundraiser widget...");

    // Load configuration
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let campaign = FundraisingState::from_dollars(
        config.target_amount,
        config.initial_raised,
        config.initial_donors,
    )
    .context("Invalid campaign totals")?;

    // Create adapters
    let feed_repo = Arc::new(InMemoryFeedRepository::new(config.feed_capacity));
    let thought_repo = Arc::new(InMemoryThoughtRepository::new(config.thoughts_capacity));

    // Create application services
    let donation_service = Arc::new(DonationService::new(
        campaign,
        feed_repo,
        CountUpAnimator::new(0, config.count_up_tick, config.count_up_steps),
    ));
    let thought_service = Arc::new(ThoughtService::new(thought_repo));

    let state = AppState {
        donation_service: donation_service.clone(),
        thought_service,
        supplies: Arc::new(Supply::gallery()),
    };

    // Background tasks live until the server stops
    let live_view = LiveView::mount(
        donation_service,
        DonationGenerator::new(),
        &LiveSettings::from(&config),
    )
    .await;

    // Rate limiting config: 2 req/sec sustained, burst of 5
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let submissions = submission_routes().layer(GovernorLayer {
        config: governor_config,
    });
    let app = build_router(state, submissions);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    live_view.shutdown().await;

    Ok(())
}
