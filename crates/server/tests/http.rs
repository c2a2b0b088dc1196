//! End-to-end route tests against an in-memory database.
//!
//! Each test builds the full router (session layer included) over a fresh
//! in-memory `SQLite` pool, then drives it with `tower::ServiceExt::oneshot`.
//! Session cookies are carried between requests by hand.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use orderdesk_server::config::ServerConfig;
use orderdesk_server::services::bootstrap;
use orderdesk_server::state::AppState;
use orderdesk_server::{app, db};

fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        session_secret: SecretString::from("kJ8#mW2$qZ5@vN1!pT4&rX7*uB0^cF3%".to_owned()),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build the app over a fresh in-memory database with migrations and seed
/// accounts applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    db::run_migrations(&pool).await.expect("run migrations");
    bootstrap::ensure_seed_users(&pool)
        .await
        .expect("seed accounts");

    let state = AppState::new(test_config(), pool.clone());
    let router = app(state).await.expect("build app");

    (router, pool)
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body as json")
}

/// POST the login form; returns the raw response.
async fn post_login(router: &Router, username: &str, password: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={username}&password={password}"
        )))
        .expect("build request");

    router.clone().oneshot(request).await.expect("send request")
}

/// Extract the session cookie from a response.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

/// Log in and return the session cookie. Panics if login fails.
async fn login(router: &Router, username: &str, password: &str) -> String {
    let response = post_login(router, username, password).await;
    assert!(
        response.status().is_redirection(),
        "login should redirect, got {}",
        response.status()
    );
    session_cookie(&response).expect("login should set a session cookie")
}

async fn get_with_cookie(router: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("build request");

    router.clone().oneshot(request).await.expect("send request")
}

async fn submit_order(router: &Router, cookie: &str, customer: &str, total: &str) -> Response<Body> {
    let payload = serde_json::json!({
        "customerName": customer,
        "customerPhone": "+62-811-555-0101",
        "customerAddress": "Jl. Merdeka 17",
        "orderDetails": [{"item": "Nasi Goreng", "qty": 2}],
        "orderTotal": total,
    });

    let request = Request::builder()
        .method("POST")
        .uri("/submit_order")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(payload.to_string()))
        .expect("build request");

    router.clone().oneshot(request).await.expect("send request")
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn seeded_credentials_establish_a_session() {
    let (router, _pool) = test_app().await;

    let response = post_login(&router, "admin", "admin123").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn wrong_password_fails_without_a_session() {
    let (router, _pool) = test_app().await;

    let response = post_login(&router, "admin", "wrong-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none());

    let view = body_json(response).await;
    assert_eq!(
        view["error"],
        "Login failed. Check your username and password."
    );
}

#[tokio::test]
async fn unknown_username_gets_the_same_generic_notice() {
    let (router, _pool) = test_app().await;

    let response = post_login(&router, "nobody", "admin123").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let view = body_json(response).await;
    assert_eq!(
        view["error"],
        "Login failed. Check your username and password."
    );
}

#[tokio::test]
async fn protected_routes_redirect_anonymous_requests_to_login() {
    let (router, _pool) = test_app().await;

    for uri in ["/", "/admin", "/user", "/logout"] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        let response = router.clone().oneshot(request).await.expect("send request");

        assert!(response.status().is_redirection(), "{uri} should redirect");
        assert_eq!(location(&response), "/login", "{uri} should go to /login");
    }
}

#[tokio::test]
async fn logout_terminates_the_session() {
    let (router, _pool) = test_app().await;
    let cookie = login(&router, "user", "user123").await;

    let response = get_with_cookie(&router, "/logout", &cookie).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");

    // The old cookie no longer authenticates.
    let response = get_with_cookie(&router, "/", &cookie).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
}

// =============================================================================
// Role gating
// =============================================================================

#[tokio::test]
async fn non_admin_is_redirected_away_from_the_dashboard() {
    let (router, _pool) = test_app().await;
    let cookie = login(&router, "user", "user123").await;

    let response = get_with_cookie(&router, "/admin", &cookie).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn admin_is_redirected_away_from_the_user_landing() {
    let (router, _pool) = test_app().await;
    let cookie = login(&router, "admin", "admin123").await;

    let response = get_with_cookie(&router, "/user", &cookie).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn home_shows_index_view_to_users_and_dashboard_to_admins() {
    let (router, _pool) = test_app().await;

    let cookie = login(&router, "user", "user123").await;
    let response = get_with_cookie(&router, "/", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert_eq!(view["username"], "user");
    assert_eq!(view["role"], "user");
    assert_eq!(view["notice"], "Welcome, User!");

    let cookie = login(&router, "admin", "admin123").await;
    let response = get_with_cookie(&router, "/", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert!(view.get("total_orders").is_some());
    assert_eq!(view["notice"], "Welcome, Admin!");
}

// =============================================================================
// Order intake
// =============================================================================

#[tokio::test]
async fn formatted_totals_are_parsed_and_persisted() {
    let (router, pool) = test_app().await;
    let cookie = login(&router, "user", "user123").await;

    let response = submit_order(&router, &cookie, "Budi", "1,234.50").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let stored: String = sqlx::query_scalar("SELECT total_payment FROM orders")
        .fetch_one(&pool)
        .await
        .expect("stored order");
    assert_eq!(stored, "1234.50");
}

#[tokio::test]
async fn unparseable_totals_are_rejected_with_a_specific_message() {
    let (router, pool) = test_app().await;
    let cookie = login(&router, "user", "user123").await;

    let response = submit_order(&router, &cookie, "Budi", "abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("total payment"),
        "message should name the total payment: {body}"
    );

    // Nothing was persisted.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .expect("count orders");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn missing_total_defaults_to_zero() {
    let (router, pool) = test_app().await;
    let cookie = login(&router, "user", "user123").await;

    let payload = serde_json::json!({
        "customerName": "Siti",
        "customerPhone": "+62-811-555-0102",
        "customerAddress": "Jl. Sudirman 4",
        "orderDetails": [],
    });
    let request = Request::builder()
        .method("POST")
        .uri("/submit_order")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, &cookie)
        .body(Body::from(payload.to_string()))
        .expect("build request");

    let response = router.clone().oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored: String = sqlx::query_scalar("SELECT total_payment FROM orders")
        .fetch_one(&pool)
        .await
        .expect("stored order");
    assert_eq!(stored, "0");
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn dashboard_starts_empty_with_zero_revenue() {
    let (router, _pool) = test_app().await;
    let cookie = login(&router, "admin", "admin123").await;

    let response = get_with_cookie(&router, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let view = body_json(response).await;
    assert_eq!(view["total_orders"], 0);
    assert_eq!(view["total_customers"], 1); // the seeded "user" account
    assert_eq!(view["average_rating"], 4.5);
    let revenue: Decimal = view["total_revenue"]
        .as_str()
        .unwrap_or_default()
        .parse()
        .expect("decimal revenue");
    assert_eq!(revenue, Decimal::ZERO);
    assert_eq!(
        view["recent_orders"].as_array().map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn revenue_sums_all_orders_and_recent_is_capped_at_five() {
    let (router, _pool) = test_app().await;
    let user_cookie = login(&router, "user", "user123").await;

    // Seven orders of 10.50 each.
    for i in 1..=7 {
        let response =
            submit_order(&router, &user_cookie, &format!("Customer {i}"), "10.50").await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let admin_cookie = login(&router, "admin", "admin123").await;
    let response = get_with_cookie(&router, "/admin", &admin_cookie).await;
    let view = body_json(response).await;

    assert_eq!(view["total_orders"], 7);

    let revenue: Decimal = view["total_revenue"]
        .as_str()
        .unwrap_or_default()
        .parse()
        .expect("decimal revenue");
    assert_eq!(revenue, Decimal::new(7350, 2)); // 7 * 10.50

    let recent = view["recent_orders"].as_array().expect("recent orders");
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["customer_name"], "Customer 7");
    assert_eq!(recent[4]["customer_name"], "Customer 3");

    // Newest first by descending id.
    let ids: Vec<i64> = recent
        .iter()
        .map(|o| o["id"].as_i64().expect("order id"))
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

// =============================================================================
// Bootstrap
// =============================================================================

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let (_router, pool) = test_app().await;

    // test_app already ran the bootstrap once; run it twice more.
    bootstrap::ensure_seed_users(&pool).await.expect("reseed");
    bootstrap::ensure_seed_users(&pool).await.expect("reseed");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count users");
    assert_eq!(users, 2);

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'admin'")
        .fetch_one(&pool)
        .await
        .expect("count admins");
    assert_eq!(admins, 1);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoints_do_not_require_auth() {
    let (router, _pool) = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("build request");
    let response = router.clone().oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/health/ready")
        .body(Body::empty())
        .expect("build request");
    let response = router.clone().oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);
}
