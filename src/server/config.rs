use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_TTL_MINUTES: i64 = 60;
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u64 = 100;

pub struct Config {
    pub database_url: String,
    /// Connection URL for a shared rate limit store. Counters stay in memory when unset.
    pub redis_url: Option<String>,

    pub host: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_ttl: chrono::Duration,

    /// `chrono` format string for dates in query parameters.
    pub date_format: String,

    pub rate_limit_window: Duration,
    pub rate_limit_max_requests: u64,

    /// Single origin allowed by CORS. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A numeric variable failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: lookup("REDIS_URL").filter(|v| !v.is_empty()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl: chrono::Duration::minutes(parse_or(
                &lookup,
                "JWT_TTL_MINUTES",
                DEFAULT_JWT_TTL_MINUTES,
            )?),
            date_format: lookup("DATE_FORMAT").unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            rate_limit_window: Duration::from_secs(parse_or(
                &lookup,
                "RATE_LIMIT_WINDOW_SECS",
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )?),
            rate_limit_max_requests: parse_or(
                &lookup,
                "RATE_LIMIT_MAX_REQUESTS",
                DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            )?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.is_empty()),
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: self.host.clone(),
            })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
