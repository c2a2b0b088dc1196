//! Home, dashboard, and user landing handlers.
//!
//! Role gating follows the original flow: a role mismatch on `/admin` or
//! `/user` is a silent redirect to `/`, where the role picks the view.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tower_sessions::Session;

use orderdesk_core::{OrderId, Role};

use crate::error::AppError;
use crate::middleware::{RequireAuth, take_flash};
use crate::models::order::Order;
use crate::services::dashboard::{DashboardService, DashboardSummary};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Index view payload for non-admin users.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub username: String,
    pub role: Role,
    pub notice: Option<String>,
}

/// Recent order entry on the dashboard.
#[derive(Debug, Serialize)]
pub struct RecentOrderView {
    pub id: OrderId,
    pub customer_name: String,
    pub total_payment: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for RecentOrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            total_payment: order.total_payment,
            created_at: order.created_at,
        }
    }
}

/// Dashboard view payload.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub total_customers: i64,
    pub average_rating: f64,
    pub recent_orders: Vec<RecentOrderView>,
    pub notice: Option<String>,
}

impl DashboardView {
    fn from_summary(summary: DashboardSummary, notice: Option<String>) -> Self {
        Self {
            total_orders: summary.total_orders,
            total_revenue: summary.total_revenue,
            total_customers: summary.total_customers,
            average_rating: summary.average_rating,
            recent_orders: summary.recent_orders.iter().map(Into::into).collect(),
            notice,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Home route: dashboard for admins, index view for everyone else.
pub async fn home(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<Response, AppError> {
    let notice = take_flash(&session).await;

    if user.role == Role::Admin {
        let summary = DashboardService::new(state.pool()).summary().await?;
        return Ok(Json(DashboardView::from_summary(summary, notice)).into_response());
    }

    Ok(Json(IndexView {
        username: user.username,
        role: user.role,
        notice,
    })
    .into_response())
}

/// Dedicated admin dashboard route.
pub async fn admin_dashboard(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    if user.role != Role::Admin {
        return Ok(Redirect::to("/").into_response());
    }

    let summary = DashboardService::new(state.pool()).summary().await?;
    Ok(Json(DashboardView::from_summary(summary, None)).into_response())
}

/// Dedicated user landing route.
pub async fn user_home(RequireAuth(user): RequireAuth) -> Response {
    if user.role != Role::User {
        return Redirect::to("/").into_response();
    }

    Json(IndexView {
        username: user.username,
        role: user.role,
        notice: None,
    })
    .into_response()
}
