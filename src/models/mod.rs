//! Request and Response models
//!
//! DTOs for the HTTP API and for the upstream NextDNS documents.

pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use requests::AggregateQuery;
pub use responses::{ClearResponse, ErrorResponse, HealthResponse, StatsResponse};
pub use upstream::{BlocklistMetadata, BlocklistRef, BlocklistSource, ProfileResponse};
