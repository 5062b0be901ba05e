//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{AggregateQuery, ClearResponse, HealthResponse, StatsResponse};
use crate::resolver::{
    build_http_client, Aggregator, BlocklistResolver, CachedResolver, NextDnsResolver,
};

/// Content type of the aggregate body
pub const PLAIN_TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Memoized profile resolver
    pub resolver: CachedResolver,
    /// Downloader for the resolved lists
    pub aggregator: Aggregator,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(resolver: CachedResolver, aggregator: Aggregator) -> Self {
        Self {
            resolver,
            aggregator,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// One HTTP client is shared by the NextDNS resolver and the aggregator.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = build_http_client(config.request_timeout)?;
        let upstream = NextDnsResolver::with_urls(
            http_client.clone(),
            config.api_url.clone(),
            config.metadata_url.clone(),
        );
        let resolver = CachedResolver::new(Arc::new(upstream), config.cache_options());
        Ok(Self::new(resolver, Aggregator::new(http_client)))
    }
}

/// Handler for GET /:configuration_id
///
/// Resolves the profile's blocklists (cached) and returns their
/// concatenated contents as plain text.
pub async fn aggregate_handler(
    State(state): State<AppState>,
    Path(configuration_id): Path<String>,
    Query(query): Query<AggregateQuery>,
) -> Result<impl IntoResponse> {
    let api_key = query.validate().map_err(AppError::InvalidRequest)?;

    let urls = state.resolver.resolve(&configuration_id, api_key).await?;
    let body = state.aggregator.aggregate(&urls).await?;
    info!(
        "Aggregated {} list(s) for profile {} ({} bytes)",
        urls.len(),
        configuration_id,
        body.len()
    );

    Ok(([(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)], body))
}

/// Handler for GET /stats
///
/// Returns statistics of the resolution cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.resolver.stats().await.into())
}

/// Handler for DELETE /cache
///
/// Drops every cached resolution. The expiry window is not restarted.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.resolver.clear().await;
    info!("Resolution cache cleared manually ({} entries)", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
