use super::*;

fn app(limiter: RateLimiter) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(from_fn_with_state(limiter, rate_limit))
}

fn request() -> Request<Body> {
    Request::builder().uri("/").body(Body::empty()).unwrap()
}

/// Tests that the middleware returns 429 once the limit is exceeded.
///
/// Expected: 200, 200, then 429
#[tokio::test]
async fn responds_too_many_requests() {
    let app = app(limiter(2));

    for _ in 0..2 {
        let response = app.clone().oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

/// Tests that a broken store never blocks requests.
///
/// Expected: 200 for every request
#[tokio::test]
async fn passes_requests_when_store_fails() {
    let limiter = RateLimiter::new(Arc::new(BrokenStore), Duration::from_secs(60), 1);
    let app = app(limiter);

    for _ in 0..3 {
        let response = app.clone().oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
