//! Dashboard aggregation.
//!
//! Pure read over the order and user stores; no side effects. The same
//! summary backs both the home route (admin branch) and `/admin`.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use orderdesk_core::Role;

use crate::db::RepositoryError;
use crate::db::{OrderRepository, UserRepository};
use crate::models::order::Order;

/// How many recent orders the dashboard shows.
pub const RECENT_ORDERS_LIMIT: i64 = 5;

/// Static placeholder rating until reviews are collected.
pub const AVERAGE_RATING: f64 = 4.5;

/// Aggregate statistics for the admin dashboard.
#[derive(Debug)]
pub struct DashboardSummary {
    /// Total number of submitted orders.
    pub total_orders: i64,
    /// Sum of all order totals, `0` when there are no orders.
    pub total_revenue: Decimal,
    /// Number of accounts with the `user` role.
    pub total_customers: i64,
    /// Placeholder rating.
    pub average_rating: f64,
    /// The five most recent orders, newest first.
    pub recent_orders: Vec<Order>,
}

/// Dashboard aggregation service.
pub struct DashboardService<'a> {
    orders: OrderRepository<'a>,
    users: UserRepository<'a>,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            users: UserRepository::new(pool),
        }
    }

    /// Compute the dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if any of the underlying queries fail.
    pub async fn summary(&self) -> Result<DashboardSummary, RepositoryError> {
        let total_orders = self.orders.count().await?;
        let total_revenue = self.orders.revenue().await?;
        let total_customers = self.users.count_by_role(Role::User).await?;
        let recent_orders = self.orders.recent(RECENT_ORDERS_LIMIT).await?;

        Ok(DashboardSummary {
            total_orders,
            total_revenue,
            total_customers,
            average_rating: AVERAGE_RATING,
            recent_orders,
        })
    }
}
