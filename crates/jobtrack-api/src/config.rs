//! API configuration.

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// JWT issuer claim
    pub jwt_issuer: String,
    /// JWT audience claim
    pub jwt_audience: String,
    /// Token lifetime in minutes
    pub jwt_duration_minutes: i64,
    /// Environment (development/production)
    pub environment: String,
    /// Seed the admin account and sample data at startup
    pub seed_on_startup: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: "sqlite://jobtrack.db".to_string(),
            cors_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1MB
            jwt_secret: "change-me-in-production".to_string(),
            jwt_issuer: "jobtrack".to_string(),
            jwt_audience: "jobtrack-clients".to_string(),
            jwt_duration_minutes: 60,
            environment: "development".to_string(),
            seed_on_startup: true,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.jwt_issuer),
            jwt_audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.jwt_audience),
            jwt_duration_minutes: std::env::var("JWT_DURATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.jwt_duration_minutes),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            seed_on_startup: std::env::var("SEED_ON_STARTUP")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.seed_on_startup),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
