//! Request DTOs for the aggregation API
//!
//! Defines the query parameters accepted by the endpoints.

use serde::Deserialize;

/// Query string of `GET /{configuration_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateQuery {
    /// NextDNS API key used to read the profile
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AggregateQuery {
    /// Returns the API key as given, or an error message if it is missing
    /// or empty.
    pub fn validate(&self) -> Result<&str, String> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err("Missing required query parameter api_key".to_string()),
        }
    }
}
