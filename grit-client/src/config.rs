//! Gateway configuration

/// Configuration for connecting to the hosted data service
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Service base URL (e.g., "https://store.example.com")
    pub base_url: String,

    /// Project API key, sent as both `apikey` and bearer token
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl GatewayConfig {
    /// Create a new gateway configuration
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network gateway from this configuration
    pub fn build(&self) -> super::NetworkGateway {
        super::NetworkGateway::from_config(self)
    }
}
