//! Startup bootstrap: seed accounts.
//!
//! Runs after migrations on every process start. Each seed account is
//! checked by username before insertion, so repeated startups are
//! idempotent. Also reachable via `orderdesk-cli seed`.

use sqlx::SqlitePool;

use orderdesk_core::Role;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::services::auth::{self, AuthError};

/// Accounts guaranteed to exist after bootstrap.
const SEED_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("admin", "admin123", Role::Admin),
    ("user", "user123", Role::User),
];

/// Ensure the seed accounts exist, creating any that are missing.
///
/// # Errors
///
/// Returns `AuthError` if hashing or a database operation fails.
pub async fn ensure_seed_users(pool: &SqlitePool) -> Result<(), AuthError> {
    let users = UserRepository::new(pool);

    for (username, password, role) in SEED_ACCOUNTS {
        if users.get_by_username(username).await?.is_some() {
            continue;
        }

        let password_hash = auth::hash_password(password)?;
        match users.create(username, &password_hash, *role).await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "seed account created");
            }
            // Lost a race with a concurrent startup; the account exists.
            Err(RepositoryError::Conflict(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
