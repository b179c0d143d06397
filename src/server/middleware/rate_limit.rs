//! Fixed-window request rate limiting keyed by client IP.
//!
//! The counter lives behind [`RateLimitStore`] so a single process can count in memory
//! while a deployment with several instances shares counters through Redis.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use redis::aio::ConnectionManager;
use tokio::sync::Mutex;

use crate::server::error::AppError;

/// In-memory maps larger than this are swept for expired windows.
const SWEEP_THRESHOLD: usize = 10_000;

/// Counts hits per key within fixed windows.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Records one hit for `key` and returns the hit count of the current window.
    ///
    /// A key's window starts at its first hit and lasts `window`.
    async fn hit(&self, key: &str, window: Duration) -> Result<u64, AppError>;
}

struct Window {
    started: Instant,
    count: u64,
}

/// Per-process counter store.
#[derive(Default)]
pub struct InMemoryStore {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryStore {
    async fn hit(&self, key: &str, window: Duration) -> Result<u64, AppError> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if windows.len() > SWEEP_THRESHOLD {
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= window {
            entry.started = now;
            entry.count = 0;
        }
        entry.count += 1;

        Ok(entry.count)
    }
}

/// Redis-backed store shared by every instance pointing at the same server.
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl RateLimitStore for RedisStore {
    async fn hit(&self, key: &str, window: Duration) -> Result<u64, AppError> {
        let mut conn = self.connection.clone();
        let ttl = window.as_secs().max(1);

        // SET NX only creates the key with its expiry at the first hit of a window.
        let (count,): (u64,) = redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(key)
            .arg(0)
            .arg("EX")
            .arg(ttl)
            .arg("NX")
            .ignore()
            .incr(key, 1)
            .query_async(&mut conn)
            .await?;

        Ok(count)
    }
}

/// Allows at most `max_requests` hits per key in each window.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    window: Duration,
    max_requests: u64,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, window: Duration, max_requests: u64) -> Self {
        Self {
            store,
            window,
            max_requests,
        }
    }

    /// Records a hit for `client` and reports whether it is within the limit.
    ///
    /// Store failures are logged and the request is allowed.
    pub async fn check(&self, client: &str) -> bool {
        let key = format!("rate_limit:{}", client);

        match self.store.hit(&key, self.window).await {
            Ok(count) => count <= self.max_requests,
            Err(e) => {
                tracing::warn!("Rate limit store failed, allowing request: {}", e);
                true
            }
        }
    }
}

/// Rejects requests from clients that exceeded their window's allowance with 429.
///
/// Clients are keyed by the peer IP from `ConnectInfo`; requests served without it
/// share the `unknown` key.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !limiter.check(&client).await {
        tracing::debug!("Rate limit exceeded for {}", client);
        return AppError::TooManyRequests.into_response();
    }

    next.run(request).await
}
