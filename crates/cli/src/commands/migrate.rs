//! Database migration command.

use tracing::info;

use super::connect;

/// Run the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if the environment is missing the database URL or a
/// migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;

    info!("Running migrations...");
    orderdesk_server::db::run_migrations(&pool).await?;
    info!("Migrations complete!");

    Ok(())
}
