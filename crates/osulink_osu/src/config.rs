//! Client configuration.

use derive_getters::Getters;
use std::time::Duration;

/// Default osu! web origin.
pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh";

/// Credentials and endpoint for the osu! API.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OsuClientConfig {
    /// OAuth application id
    client_id: u32,
    /// OAuth application secret
    client_secret: String,
    /// Web origin; the API lives under `/api/v2` and tokens under `/oauth/token`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Per-request timeout
    #[builder(default = "Duration::from_secs(15)")]
    timeout: Duration,
}

impl OsuClientConfig {
    /// Configuration for the public osu! servers.
    pub fn new(client_id: u32, client_secret: impl Into<String>) -> Self {
        Self {
            client_id,
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base_url.trim_end_matches('/'))
    }

    /// API root.
    pub fn api_url(&self) -> String {
        format!("{}/api/v2", self.base_url.trim_end_matches('/'))
    }
}
