/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the external wallet service.
    pub wallet_base_url: String,
    /// Timeout for wallet credit calls in seconds (default: `5`).
    pub wallet_timeout_secs: u64,
    /// Concurrency limit for the administrative decay pass (default: `8`).
    pub decay_concurrency: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `WALLET_BASE_URL`      | `http://localhost:9090`    |
    /// | `WALLET_TIMEOUT_SECS`  | `5`                        |
    /// | `DECAY_CONCURRENCY`    | `8`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let wallet_base_url =
            std::env::var("WALLET_BASE_URL").unwrap_or_else(|_| "http://localhost:9090".into());

        let wallet_timeout_secs: u64 = std::env::var("WALLET_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("WALLET_TIMEOUT_SECS must be a valid u64");

        let decay_concurrency: usize = std::env::var("DECAY_CONCURRENCY")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("DECAY_CONCURRENCY must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            wallet_base_url,
            wallet_timeout_secs,
            decay_concurrency,
        }
    }
}
