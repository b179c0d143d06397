use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    middleware::rate_limit::{InMemoryStore, RateLimitStore, RateLimiter, RedisStore},
    service::token::TokenService,
};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the request rate limiter.
///
/// Counters are kept in Redis when `REDIS_URL` is set and the server answers, so every
/// instance shares one allowance per client. Otherwise they are kept in this process.
pub async fn setup_rate_limiter(config: &Config) -> RateLimiter {
    let store: Arc<dyn RateLimitStore> = match &config.redis_url {
        Some(url) => match connect_to_redis(url).await {
            Ok(store) => {
                tracing::info!("Rate limiting with Redis store");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    "Redis unavailable ({}), falling back to in-memory rate limiting",
                    e
                );
                Arc::new(InMemoryStore::new())
            }
        },
        None => Arc::new(InMemoryStore::new()),
    };

    RateLimiter::new(
        store,
        config.rate_limit_window,
        config.rate_limit_max_requests,
    )
}

async fn connect_to_redis(url: &str) -> Result<RedisStore, AppError> {
    let client = redis::Client::open(url)?;
    let mut connection = redis::aio::ConnectionManager::new(client).await?;

    redis::cmd("PING")
        .query_async::<String>(&mut connection)
        .await?;

    Ok(RedisStore::new(connection))
}

pub fn setup_token_service(config: &Config) -> TokenService {
    TokenService::new(config.jwt_secret.as_bytes(), config.jwt_ttl)
}

/// Builds the CORS layer, restricted to `CORS_ALLOWED_ORIGIN` when it is set.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = match &config.cors_allowed_origin {
        Some(origin) => {
            AllowOrigin::exact(HeaderValue::from_str(origin).map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                }
            })?)
        }
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any))
}
