//! Upstream DTOs
//!
//! Shapes of the JSON documents read from the NextDNS API and the public
//! blocklist metadata repository. Unknown fields are ignored.

use serde::Deserialize;

/// Response of `GET /profiles/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub data: ProfileData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileData {
    pub privacy: PrivacySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrivacySettings {
    #[serde(default)]
    pub blocklists: Vec<BlocklistRef>,
}

/// A blocklist enabled on a profile, by metadata id
#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistRef {
    pub id: String,
}

/// Metadata document describing where a blocklist's text lives.
///
/// A single `source` wins over `sources` when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlocklistMetadata {
    #[serde(default)]
    pub source: Option<BlocklistSource>,
    #[serde(default)]
    pub sources: Vec<BlocklistSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistSource {
    pub url: String,
}

impl BlocklistMetadata {
    /// Downstream text-file URLs in declaration order.
    pub fn urls(&self) -> Vec<String> {
        match &self.source {
            Some(source) => vec![source.url.clone()],
            None => self.sources.iter().map(|s| s.url.clone()).collect(),
        }
    }
}
