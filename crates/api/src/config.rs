use crate::auth::jwt::JwtConfig;

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
    /// HTTP request timeout in seconds (default: `120`; generation round
    /// trips are the slow path).
    pub request_timeout_secs: u64,
    /// Base URL of the code-generation service.
    pub generation_api_url: String,
    /// Bearer token for the code-generation service.
    pub generation_api_key: String,
    /// Base URL of the deployment service.
    pub deploy_api_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    /// | `GENERATION_API_URL`   | `https://api.x.ai`         |
    /// | `GENERATION_API_KEY`   | **required**               |
    /// | `DEPLOY_API_URL`       | `http://localhost:8100`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generation_api_url =
            std::env::var("GENERATION_API_URL").unwrap_or_else(|_| "https://api.x.ai".into());

        let generation_api_key = std::env::var("GENERATION_API_KEY")
            .expect("GENERATION_API_KEY must be set in the environment");

        let deploy_api_url =
            std::env::var("DEPLOY_API_URL").unwrap_or_else(|_| "http://localhost:8100".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            generation_api_url,
            generation_api_key,
            deploy_api_url,
            jwt,
        }
    }
}
