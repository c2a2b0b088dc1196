//! Account creation command.

use tracing::info;

use orderdesk_core::Role;
use orderdesk_server::services::auth::AuthService;

use super::connect;

/// Create an account with the given role.
///
/// # Errors
///
/// Returns an error if the role is unknown, the password is too weak, or
/// the username is already taken.
pub async fn create(
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role: Role = role.parse()?;

    let pool = connect().await?;
    let auth = AuthService::new(&pool);

    let user = auth.create_user(username, password, role).await?;
    info!(username = %user.username, role = %user.role, id = %user.id, "account created");

    Ok(())
}
