//! Common test utilities for integration tests.
//!
//! Router-level tests run against a lazily-connected pool and never touch
//! the database. Database-backed tests use `TEST_DATABASE_URL` and skip
//! themselves when it is not set.

// Allow dead code in this module - these are helper utilities that may not be
// used by every integration test binary.
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use vehicle_registry_api::{
    app::create_app,
    config::{Config, LoggingConfig, ServerConfig},
};

/// Test configuration pointing at a throwaway database location.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 5,
        },
        database: persistence::db::DatabaseConfig {
            name: "registry_test".to_string(),
            user: "registry".to_string(),
            password: "registry_test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 9,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 1,
            idle_timeout_secs: 60,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Build the application under test.
pub fn create_test_app(config: Config, pool: PgPool) -> Router {
    create_app(config, pool)
}

/// Build the application with a lazy pool that never connects.
///
/// Suitable for tests that exercise routing, extraction, and CORS without a
/// database.
pub fn create_offline_app() -> Router {
    let config = test_config();
    let pool = persistence::db::create_lazy_pool(&config.database);
    create_app(config, pool)
}

/// Connect to the test database named by `TEST_DATABASE_URL`.
///
/// Returns `None` when the variable is not set, in which case the calling
/// test should skip itself. The schema is synchronized before returning.
pub async fn try_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    persistence::schema::sync(&pool)
        .await
        .expect("Failed to synchronize schema");

    Some(pool)
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request.
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

/// A name unlikely to collide with rows from other tests sharing the
/// database. Kept URL-safe because names also travel as path segments.
pub fn unique_name(prefix: &str) -> String {
    use fake::{faker::name::en::Name, Fake};
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fake_name: String = Name().fake();
    let fake_name: String = fake_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{prefix}-{fake_name}-{}-{n}", std::process::id())
}
