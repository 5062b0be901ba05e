//! API Module
//!
//! HTTP handlers and routing for the aggregation service.
//!
//! # Endpoints
//! - `GET /:configuration_id?api_key=...` - Aggregated blocklists
//! - `GET /stats` - Resolution cache statistics
//! - `DELETE /cache` - Clear the resolution cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
