//! Response DTOs for the aggregation API
//!
//! Defines the structure of outgoing JSON response bodies. The aggregate
//! itself is plain text and has no DTO.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Resolutions answered from the cache
    pub hits: u64,
    /// Resolutions that reached NextDNS
    pub misses: u64,
    /// Cached resolutions right now
    pub current_size: usize,
    /// Configured bound, null when unbounded
    pub max_size: Option<usize>,
    pub evictions: u64,
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            current_size: stats.current_size,
            max_size: stats.max_size,
            evictions: stats.evictions,
            expirations: stats.expirations,
        }
    }
}

/// Response body for the cache clear endpoint (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Entries dropped by this clear
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached resolution(s)", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            current_size: 1,
            max_size: None,
            evictions: 0,
            expirations: 2,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.75).abs() < 0.001);
        assert_eq!(resp.expirations, 2);

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""max_size":null"#));
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::new(4);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""cleared":4"#));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
