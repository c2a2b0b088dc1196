//! Authentication route handlers.
//!
//! Handles login, logout, and the session lifecycle around them. View
//! rendering is a presentation concern; handlers return the view payloads
//! as JSON.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{RequireAuth, set_current_user, set_flash};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Generic failure notice; never reveals which of the two fields was wrong.
const LOGIN_FAILED_NOTICE: &str = "Login failed. Check your username and password.";

// =============================================================================
// Form and View Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login view payload.
#[derive(Debug, Serialize)]
pub struct LoginView {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login view.
pub async fn login_page() -> Json<LoginView> {
    Json(LoginView {
        error: None,
        success: None,
    })
}

/// Handle login form submission.
///
/// On success, stores the user identity in a fresh session, leaves a
/// welcome notice for the home view, and redirects to `/`.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.username, &form.password).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username,
                role: user.role,
            };

            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!(error = %e, "failed to store session");
                return AppError::from(e).into_response();
            }

            let notice = format!("Welcome, {}!", user.role.display_name());
            if let Err(e) = set_flash(&session, &notice).await {
                // The login itself succeeded; losing the notice is harmless.
                tracing::warn!(error = %e, "failed to store flash notice");
            }

            tracing::info!(username = %current.username, role = %current.role, "login succeeded");
            Redirect::to("/").into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "login failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginView {
                    error: Some(LOGIN_FAILED_NOTICE.to_owned()),
                    success: None,
                }),
            )
                .into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Handle logout.
///
/// Requires an active session; terminates it and redirects to the login
/// page.
pub async fn logout(
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<Redirect, AppError> {
    session.flush().await?;
    tracing::info!(username = %user.username, "logged out");
    Ok(Redirect::to("/login"))
}
