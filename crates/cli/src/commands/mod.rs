//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;
pub mod user;

use secrecy::SecretString;
use sqlx::SqlitePool;

/// Connect to the database named by the environment.
///
/// Reads `ORDERDESK_DATABASE_URL` (falling back to `DATABASE_URL`), loading
/// `.env` first if present.
pub async fn connect() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ORDERDESK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ORDERDESK_DATABASE_URL not set")?;

    let pool = orderdesk_server::db::create_pool(&database_url).await?;
    Ok(pool)
}
