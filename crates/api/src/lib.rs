pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use cases::{CaseLookup, ReferenceData, UpstreamClient};
use config::{AppConfig, UpstreamMode};
use metrics::Metrics;

/// Used when `RUST_LOG` is unset. `dcdrc_api` is the binary's own target.
pub const DEFAULT_LOG_FILTER: &str = "dcdrc_api=info,api=info,cases=info,tower_http=info";

pub struct AppState {
    pub lookup: CaseLookup<UpstreamClient>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(lookup: CaseLookup<UpstreamClient>) -> Self {
        Self {
            lookup,
            metrics: Metrics::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let reference = ReferenceData::mock().context("Invalid reference data")?;

        tracing::info!(
            mode = ?config.upstream.mode,
            upstream = %config.upstream.base_url,
            timeout_secs = config.upstream.timeout_secs,
            states = reference.states().len(),
            cases = reference.cases().len(),
            "Loaded configuration"
        );

        let lookup = match config.upstream.mode {
            UpstreamMode::Live => {
                let client = UpstreamClient::new(
                    config.upstream.base_url.clone(),
                    Duration::from_secs(config.upstream.timeout_secs),
                )
                .context("Failed to create upstream client")?;
                CaseLookup::new(reference, client)
            }
            UpstreamMode::Offline => CaseLookup::offline(reference),
        };

        Ok(Self::new(lookup))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    routes::router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
