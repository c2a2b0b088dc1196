//! Orderdesk server library.
//!
//! Order intake and admin dashboard web application:
//!
//! - Axum web framework over a shared `SQLite` pool
//! - tower-sessions (`SQLite` store) for session-based authentication
//! - argon2 password hashing
//! - JSON view payloads; rendering is a presentation concern upstream
//!
//! The binary in `main.rs` wires configuration, Sentry, tracing, and the
//! listener around [`app`]; integration tests drive [`app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use state::AppState;

/// Build the application router with its session layer.
///
/// Expects migrations to have run already; creates the session store's own
/// table if missing.
///
/// # Errors
///
/// Returns `sqlx::Error` if the session store cannot be prepared.
pub async fn app(state: AppState) -> Result<Router, sqlx::Error> {
    let session_layer = middleware::create_session_layer(state.pool(), state.config()).await?;

    Ok(routes::routes()
        .layer(session_layer)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state))
}
