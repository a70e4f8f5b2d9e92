use std::sync::OnceLock;

/// Gateway configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the school REST API, without a trailing slash.
    pub api_base_url: String,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    /// Optional cookie domain for multi-subdomain deployments.
    pub cookie_domain: Option<String>,
}

static CONFIG: OnceLock<GatewayConfig> = OnceLock::new();

/// Load `.env` and resolve the gateway configuration. Safe to call more
/// than once; only the first call has effect.
pub fn load() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = from_env();
        tracing::info!(api = %config.api_base_url, "gateway config loaded");
        config
    });
}

/// Get the loaded configuration, resolving from the environment on first
/// use if `load()` was not called.
pub fn get() -> &'static GatewayConfig {
    CONFIG.get_or_init(from_env)
}

fn from_env() -> GatewayConfig {
    let api_base_url = std::env::var("SCHOOL_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    GatewayConfig {
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        cookie_secure: std::env::var("COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false),
        cookie_domain: std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty()),
    }
}
