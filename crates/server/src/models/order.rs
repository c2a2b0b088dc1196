//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use orderdesk_core::OrderId;

/// A persisted customer purchase record (domain type).
///
/// Orders are immutable once created and are not linked to the submitting
/// account (anonymous order capture).
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer name as entered on the form.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Free-text delivery address.
    pub customer_address: String,
    /// Line items, exactly as submitted by the order form.
    pub details: serde_json::Value,
    /// Validated non-negative total.
    pub total_payment: Decimal,
    /// When the order was submitted.
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a new order.
#[derive(Debug)]
pub struct NewOrder<'a> {
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub customer_address: &'a str,
    pub details: &'a serde_json::Value,
    pub total_payment: Decimal,
}
