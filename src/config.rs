/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, token secret, CORS, ...)
 * - Validate them up front; a missing or broken value fails start-up
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the identity token codec.
///
/// The secret is the single signing key for the whole process; it is handed to
/// `TokenCodec::new` once at start-up.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl: Duration,
    pub leeway_seconds: u64,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenConfig")
            .field("ttl", &self.ttl)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub database: PgConnectOptions,
    pub cors_allowed_origins: Vec<String>,
    pub cookie_secure: bool,

    pub token: TokenConfig,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let database = database_url()?
            .parse::<PgConnectOptions>()
            .map_err(|_| ConfigError::Invalid("DATABASE_URL"))?;

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::Invalid("TOKEN_SECRET"));
        }

        let ttl_seconds = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300); // 5 min
        if ttl_seconds == 0 {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS"));
        }

        let leeway_seconds = std::env::var("TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(v) => v
                .parse::<u32>()
                .ok()
                .filter(|c| (4..=31).contains(c))
                .ok_or(ConfigError::Invalid("BCRYPT_COST"))?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            addr,
            app_env,
            database,
            cors_allowed_origins,
            cookie_secure,
            token: TokenConfig {
                secret,
                ttl: Duration::from_secs(ttl_seconds),
                leeway_seconds,
            },
            bcrypt_cost,
        })
    }
}

/// DATABASE_URL wins; otherwise the URL is assembled from the DB_* parts.
fn database_url() -> Result<String, ConfigError> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(url);
    }

    let part = |key: &'static str| {
        std::env::var(key)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(key))
    };

    let host = part("DB_HOST").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
    let port = part("DB_PORT")?;
    let user = part("DB_USER")?;
    let password = part("DB_PASSWORD")?;
    let name = part("DB_NAME")?;

    Ok(format!(
        "postgresql://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}
