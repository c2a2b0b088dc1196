//! Order intake handler.
//!
//! Accepts a JSON order submission, validates the total, and persists one
//! order row per successful call. There is no idempotency key; duplicate
//! submissions create duplicate rows.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use orderdesk_core::OrderTotal;

use crate::db::{OrderRepository, RepositoryError};
use crate::middleware::RequireAuth;
use crate::models::order::NewOrder;
use crate::state::AppState;

// =============================================================================
// Request and Response Types
// =============================================================================

/// Incoming order submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Line items, pre-serialized by the order form.
    pub order_details: serde_json::Value,
    /// Display-formatted total, possibly with thousands separators.
    /// Missing means "0", matching the order form's behaviour.
    #[serde(default = "default_order_total")]
    pub order_total: String,
}

fn default_order_total() -> String {
    "0".to_owned()
}

/// Submission outcome.
#[derive(Debug, Serialize)]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub message: String,
}

/// Why a submission failed.
enum IntakeError {
    /// The total didn't parse as a non-negative amount.
    InvalidTotal,
    /// Anything else (persistence failures included).
    Other(RepositoryError),
}

// =============================================================================
// Handler
// =============================================================================

/// Handle an order submission.
///
/// Returns 201 with `success: true` when the order was persisted, or 400
/// with `success: false` and a message distinguishing a bad total from any
/// other failure.
pub async fn submit_order(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitOrderRequest>,
) -> Response {
    match intake(&state, &req).await {
        Ok(()) => {
            tracing::info!(
                submitted_by = %user.username,
                customer = %req.customer_name,
                "order saved"
            );
            (
                StatusCode::CREATED,
                Json(SubmitOrderResponse {
                    success: true,
                    message: "Order saved successfully.".to_owned(),
                }),
            )
                .into_response()
        }
        Err(IntakeError::InvalidTotal) => (
            StatusCode::BAD_REQUEST,
            Json(SubmitOrderResponse {
                success: false,
                message: "Failed to save order: total payment is not a valid amount".to_owned(),
            }),
        )
            .into_response(),
        Err(IntakeError::Other(e)) => {
            tracing::error!(error = %e, "order submission failed");
            (
                StatusCode::BAD_REQUEST,
                Json(SubmitOrderResponse {
                    success: false,
                    message: format!("Failed to save order: {e}"),
                }),
            )
                .into_response()
        }
    }
}

/// Validate and persist the submission.
async fn intake(state: &AppState, req: &SubmitOrderRequest) -> Result<(), IntakeError> {
    let total = OrderTotal::parse(&req.order_total).map_err(|_| IntakeError::InvalidTotal)?;

    let orders = OrderRepository::new(state.pool());
    orders
        .create(&NewOrder {
            customer_name: &req.customer_name,
            customer_phone: &req.customer_phone,
            customer_address: &req.customer_address,
            details: &req.order_details,
            total_payment: total.amount(),
        })
        .await
        .map_err(IntakeError::Other)?;

    Ok(())
}
