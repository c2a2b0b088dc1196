//! Seed account command.
//!
//! Ensures the bootstrap accounts exist. Safe to run repeatedly; accounts
//! are checked by username before insertion.

use tracing::info;

use super::connect;

/// Ensure the seed accounts exist.
///
/// # Errors
///
/// Returns an error if the database is unreachable or seeding fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;

    info!("Ensuring seed accounts...");
    orderdesk_server::services::bootstrap::ensure_seed_users(&pool).await?;
    info!("Seed accounts ready");

    Ok(())
}
