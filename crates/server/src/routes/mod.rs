//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Admin: dashboard view; others: index view
//! GET  /login           - Login view
//! POST /login           - Authenticate, establish session
//! GET  /admin           - Dashboard view (role=admin, else redirect /)
//! GET  /user            - Index view (role=user, else redirect /)
//! GET  /logout          - Terminate session, redirect /login
//! POST /submit_order    - Order intake (JSON in, JSON out)
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (database ping)
//! ```
//!
//! All routes except `/login` and the health checks require an active
//! session; absence redirects to `/login`.

pub mod auth;
pub mod home;
pub mod orders;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/admin", get(home::admin_dashboard))
        .route("/user", get(home::user_home))
        .route("/logout", get(auth::logout))
        .route("/submit_order", post(orders::submit_order))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
