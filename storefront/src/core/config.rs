/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_API_URL | http://localhost:54321 | Base URL of the hosted data backend |
/// | DATA_API_KEY | (empty) | API key sent with every backend call |
/// | HTTP_PORT | 8080 | Port for the asset/health endpoints |
/// | STATIC_DIR | static | Directory with the default logo and footer video |
/// | DATA_DIR | data | Directory for the preference database |
/// | ADMIN_PASSWORD | dopetech2024 | Admin panel gate (not a security boundary) |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | CATALOG_TIMEOUT_MS | 2000 | Bootstrap race window before sample data wins |
/// | SEARCH_DEBOUNCE_MS | 300 | Trailing debounce on search input |
///
/// # Example
///
/// ```ignore
/// DATA_API_URL=https://abc.supabase.co HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted data backend
    pub data_api_url: String,
    /// API key for the backend
    pub data_api_key: String,
    /// Port for the HTTP surface
    pub http_port: u16,
    /// Directory with bundled static assets
    pub static_dir: String,
    /// Directory for locally persisted state
    pub data_dir: String,
    /// Admin panel password
    pub admin_password: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Catalog bootstrap timeout (milliseconds)
    pub catalog_timeout_ms: u64,
    /// Search input debounce (milliseconds)
    pub search_debounce_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            data_api_url: std::env::var("DATA_API_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            data_api_key: std::env::var("DATA_API_KEY").unwrap_or_default(),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "dopetech2024".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            catalog_timeout_ms: std::env::var("CATALOG_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            search_debounce_ms: std::env::var("SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(crate::events::SEARCH_DEBOUNCE_MS),
        }
    }

    /// Override the fields tests care about
    pub fn with_overrides(
        data_dir: impl Into<String>,
        http_port: u16,
        admin_password: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config.admin_password = admin_password.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
