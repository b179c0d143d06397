//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle and the token service and rate limiter share their internals.

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use super::{middleware::rate_limit::RateLimiter, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Limiter applied to every route by the rate limit middleware.
    pub rate_limiter: RateLimiter,

    /// `chrono` format used to parse date filters in query strings.
    pub date_format: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        rate_limiter: RateLimiter,
        date_format: String,
    ) -> Self {
        Self {
            db,
            tokens,
            rate_limiter,
            date_format,
        }
    }
}

impl FromRef<AppState> for RateLimiter {
    fn from_ref(state: &AppState) -> Self {
        state.rate_limiter.clone()
    }
}
