//! Order repository for database operations.
//!
//! Totals are stored as decimal text to avoid floating-point drift; rows
//! that fail to parse back surface as `RepositoryError::DataCorruption`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use orderdesk_core::OrderId;

use super::RepositoryError;
use crate::models::order::{NewOrder, Order};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    customer_phone: String,
    customer_address: String,
    order_details: String,
    total_payment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let details = serde_json::from_str(&row.order_details).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order details in database: {e}"))
        })?;

        let total_payment: Decimal = row.total_payment.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid total payment in database: {e}"))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            details,
            total_payment,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new order. Orders are immutable after creation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the order details cannot
    /// be serialized, or `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewOrder<'_>) -> Result<Order, RepositoryError> {
        let details = serde_json::to_string(new.details).map_err(|e| {
            RepositoryError::DataCorruption(format!("failed to serialize order details: {e}"))
        })?;

        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (customer_name, customer_phone, customer_address,
                                order_details, total_payment, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, customer_name, customer_phone, customer_address,
                      order_details, total_payment, created_at
            ",
        )
        .bind(new.customer_name)
        .bind(new.customer_phone)
        .bind(new.customer_address)
        .bind(details)
        .bind(new.total_payment.to_string())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Count all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Sum of all order totals, `0` when there are no orders.
    ///
    /// Summation happens in Rust on the parsed decimals so formatting and
    /// precision survive the TEXT storage.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored total is invalid.
    pub async fn revenue(&self) -> Result<Decimal, RepositoryError> {
        let totals = sqlx::query_scalar::<_, String>("SELECT total_payment FROM orders")
            .fetch_all(self.pool)
            .await?;

        let mut revenue = Decimal::ZERO;
        for raw in totals {
            let amount: Decimal = raw.parse().map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid total payment in database: {e}"))
            })?;
            revenue += amount;
        }

        Ok(revenue)
    }

    /// The most recently created orders, newest first (descending id).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_name, customer_phone, customer_address,
                   order_details, total_payment, created_at
            FROM orders
            ORDER BY id DESC
            LIMIT ?1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
