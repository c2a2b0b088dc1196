//! Domain models and session types.

pub mod order;
pub mod session;
pub mod user;

pub use session::{CurrentUser, keys as session_keys};
