//! User domain types.
//!
//! The password hash deliberately lives outside this type; only the login
//! path of the repository ever surfaces it.

use chrono::{DateTime, Utc};

use orderdesk_core::{Role, UserId};

/// An account that can log in (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Access role gating route visibility.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
